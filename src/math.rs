/// Moves a cursor one step back, stopping at the first item
pub fn step_back(cursor: usize) -> usize {
    cursor.saturating_sub(1)
}

/// Moves a cursor one step forward, stopping at the last of `len` items
pub fn step_forward(cursor: usize, len: usize) -> usize {
    if cursor + 1 >= len {
        cursor
    } else {
        cursor + 1
    }
}

pub fn wrap_forward(index: usize, len: usize) -> usize {
    (index + 1) % len
}
