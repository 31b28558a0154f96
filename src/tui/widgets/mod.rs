pub mod input_buffer;
pub mod stat_card;
pub mod tab_strip;
