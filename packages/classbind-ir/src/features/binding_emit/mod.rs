//! Binding emission: class model trees → jnim declaration text

pub mod class_identity;
pub mod emitter;

pub use class_identity::ClassIdentity;
pub use emitter::{
    emit_class, emit_document, render_field, render_method, BindingEmitter, EmitOptions,
};
