//! In-place lexicographic permutation stepping.

/// Rearranges `items` into the next lexicographically greater permutation.
///
/// Returns `false` (leaving `items` sorted ascending) once the last
/// permutation has been passed, so a loop started from sorted input visits
/// every permutation exactly once.
///
/// # Algorithm
///
/// 1. Find the longest non-increasing suffix; its predecessor is the pivot
/// 2. Swap the pivot with the rightmost suffix element greater than it
/// 3. Reverse the suffix
///
/// # Complexity
/// O(n) worst case, O(1) amortized
///
/// # Examples
///
/// ```
/// use u_tsp::brute::next_permutation;
///
/// let mut p = [1, 2, 3];
/// let mut seen = vec![p.to_vec()];
/// while next_permutation(&mut p) {
///     seen.push(p.to_vec());
/// }
/// assert_eq!(seen.len(), 6);
/// assert_eq!(seen[1], vec![1, 3, 2]);
/// assert_eq!(p, [1, 2, 3]);
/// ```
pub fn next_permutation<T: Ord>(items: &mut [T]) -> bool {
    let n = items.len();
    if n < 2 {
        return false;
    }

    let mut pivot = n - 1;
    while pivot > 0 && items[pivot - 1] >= items[pivot] {
        pivot -= 1;
    }
    if pivot == 0 {
        items.reverse();
        return false;
    }

    let mut successor = n - 1;
    while items[successor] <= items[pivot - 1] {
        successor -= 1;
    }
    items.swap(pivot - 1, successor);
    items[pivot..].reverse();
    true
}
