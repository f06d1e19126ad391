//! Narrow interface to the external packaging collaborator.

/// Receiver for finished parts.
///
/// The builder's entire obligation to the packaging layer is to hand over
/// well-formed bytes under a stable part name with a content type; archiving,
/// relationship manifests, and content-type manifests happen on the other
/// side of this trait. A failed write is fatal to the current save but
/// leaves the in-memory document intact for a retry.
pub trait PartWriter {
    fn write_part(
        &mut self,
        part_name: &str,
        content: &[u8],
        content_type: &str,
    ) -> std::io::Result<()>;
}

/// Content types of the parts this builder emits.
pub mod content_type {
    pub const PRESENTATION: &str =
        "application/vnd.openxmlformats-officedocument.presentationml.presentation.main+xml";
    pub const SLIDE: &str =
        "application/vnd.openxmlformats-officedocument.presentationml.slide+xml";
}
