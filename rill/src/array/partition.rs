/// Partition a slice in place: elements failing `predicate` gather at the
/// front, passing elements at the back.
///
/// Two pointers move toward each other. A pair is swapped only when the
/// front element passes and the back element fails, so the partition is not
/// stable. Returns the index of the first passing element, which is
/// `slice.len()` when none pass.
///
/// `predicate` is called at most twice per element.
pub fn partition_by<T, P>(slice: &mut [T], mut predicate: P) -> usize
where
    P: FnMut(&T) -> bool,
{
    let mut front = 0;
    let mut back = slice.len();
    // slice[..front] fails and slice[back..] passes
    loop {
        while front < back && !predicate(&slice[front]) {
            front += 1;
        }
        while front < back && predicate(&slice[back - 1]) {
            back -= 1;
        }
        if front >= back {
            return front;
        }
        slice.swap(front, back - 1);
        front += 1;
        back -= 1;
    }
}
