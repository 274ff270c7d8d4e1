pub mod synthetic_idx;
