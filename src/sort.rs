//! The classic O(n²) comparison sorts over slices, in place and ascending.
//! Bubble sort shares its shape with the linked lists' own `sort`.

/// Bubble sort: repeatedly swaps adjacent out-of-order pairs, shrinking the
/// unsorted suffix each pass. Stable.
pub fn bubble_sort<T: Ord>(values: &mut [T]) {
    let n = values.len();
    for i in 0..n.saturating_sub(1) {
        let mut swapped = false;
        for j in 0..n - i - 1 {
            if values[j] > values[j + 1] {
                values.swap(j, j + 1);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }
}

/// Insertion sort: grows a sorted prefix by rotating each element back to
/// its place. Stable.
pub fn insertion_sort<T: Ord>(values: &mut [T]) {
    for i in 1..values.len() {
        let mut j = i;
        while j > 0 && values[j - 1] > values[j] {
            values.swap(j - 1, j);
            j -= 1;
        }
    }
}

/// Selection sort: swaps the minimum of the unsorted suffix into place.
/// Not stable.
pub fn selection_sort<T: Ord>(values: &mut [T]) {
    let n = values.len();
    for i in 0..n.saturating_sub(1) {
        let mut min = i;
        for j in i + 1..n {
            if values[j] < values[min] {
                min = j;
            }
        }
        if min != i {
            values.swap(i, min);
        }
    }
}
