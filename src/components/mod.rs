pub mod cart_drawer;
pub mod cart_line;
pub mod header;
pub mod session_card;
pub mod toast;
