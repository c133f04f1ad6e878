pub mod binary_insertion_sort;
pub mod common;
pub mod insertion_sort;
pub mod merge_sort_bottom_up;
pub mod merge_sort_top_down;
pub mod natural_merge_sort;
