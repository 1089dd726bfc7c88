use uuid::Uuid;

/// Contract for domain entities addressed by a stable identifier.
pub trait Identifiable {
    fn id(&self) -> Uuid;
}

/// Contract for domain entities with a short human-readable label.
pub trait Displayable {
    fn display_label(&self) -> String;
}
