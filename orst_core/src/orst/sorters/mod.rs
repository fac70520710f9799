pub mod bubble_sorter;
pub mod hybrid_merge_sorter;
pub mod insertion_sorter;
pub mod merge;
pub mod quick_sorter;
pub mod selection_sorter;
