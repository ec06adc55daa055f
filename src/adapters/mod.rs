pub mod hostaway;
pub mod sink;
