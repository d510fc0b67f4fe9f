//! Synthetic SCSV inputs shared by the benches and the tests that keep them parseable.

pub fn make_plain(rows: usize) -> String {
    let mut s = String::new();
    for i in 0..rows {
        s.push_str(&format!("repo{},pkg{},{}\n", i % 8, i, i + 1));
    }
    s
}

/// Strict-mode blocks of ten rows: a reset, a counted flow key, then a flow
/// value declared on the line after the key so neither cancels the other.
pub fn make_flowing(rows: usize) -> String {
    let mut s = String::from("#@strictmode,true\n");
    for i in 0..rows {
        match i % 10 {
            0 => {
                s.push_str("--\n");
                s.push_str(&format!("10|repo{},pkg{},first{}\n", i % 8, i, i));
            }
            1 => s.push_str(&format!(",pkg{},|v{}\n", i, i)),
            _ => s.push_str(&format!(",pkg{},\n", i)),
        }
    }
    s
}
