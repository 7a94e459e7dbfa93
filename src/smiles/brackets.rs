//! Branch parenthesis matching by depth counting.
//!
//! Offsets are positions in the character sequence. Text inside bracket atoms
//! (`[...]`) is skipped so that nothing inside an atom can be mistaken for a
//! branch mark.

use crate::smiles::error::SmilesError;

/// Offset of the `)` that closes the `(` at `open`.
pub fn matching_close(chars: &[char], open: usize) -> Result<usize, SmilesError> {
    if chars.get(open) != Some(&'(') {
        return Err(SmilesError::UnbalancedBranch { pos: open });
    }
    let mut depth = 0usize;
    let mut in_atom = false;
    for (i, &ch) in chars.iter().enumerate().skip(open) {
        match ch {
            '[' => in_atom = true,
            ']' => in_atom = false,
            '(' if !in_atom => depth += 1,
            ')' if !in_atom => {
                depth -= 1;
                if depth == 0 {
                    return Ok(i);
                }
            }
            _ => {}
        }
    }
    Err(SmilesError::UnbalancedBranch { pos: open })
}

/// Offset of the `(` that the `)` at `close` terminates.
pub fn matching_open(chars: &[char], close: usize) -> Result<usize, SmilesError> {
    if chars.get(close) != Some(&')') {
        return Err(SmilesError::UnbalancedBranch { pos: close });
    }
    let mut depth = 0usize;
    let mut in_atom = false;
    for i in (0..=close).rev() {
        match chars[i] {
            ']' => in_atom = true,
            '[' => in_atom = false,
            ')' if !in_atom => depth += 1,
            '(' if !in_atom => {
                depth -= 1;
                if depth == 0 {
                    return Ok(i);
                }
            }
            _ => {}
        }
    }
    Err(SmilesError::UnbalancedBranch { pos: close })
}
