//! Low-level infrastructure: the big-endian byte codec used to take frames
//! apart and put them back together.
pub mod codec;
