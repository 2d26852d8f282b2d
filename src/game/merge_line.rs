use crate::game::board::SIZE;

/// Slide a line towards index 0 and merge equal neighbours.
///
/// Zeros are dropped first, then the remaining tiles are scanned once from the
/// left: two equal consecutive tiles become one tile of their sum and the scan
/// skips past both, so a tile merges at most once. The result is padded with
/// zeros on the right.
pub fn merge_line(line: [u32; SIZE]) -> [u32; SIZE] {
    let mut tiles = [0; SIZE];
    let mut len = 0;
    for value in line.into_iter().filter(|&v| v != 0) {
        tiles[len] = value;
        len += 1;
    }

    let mut merged = [0; SIZE];
    let mut write = 0;
    let mut i = 0;
    while i < len {
        if i + 1 < len && tiles[i] == tiles[i + 1] {
            merged[write] = tiles[i] * 2;
            i += 2;
        } else {
            merged[write] = tiles[i];
            i += 1;
        }
        write += 1;
    }
    merged
}
