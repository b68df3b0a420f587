/// Concrete popups. Shared helpers and the trait live in `components/popup.rs`.
pub mod add_contact;
pub mod confirm;
pub mod contact_info;

pub use crate::components::popup::{
    PopupComponent, centered_rect_fixed, draw_popup_frame, render_backdrop,
};
