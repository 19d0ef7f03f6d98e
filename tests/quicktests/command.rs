use avl::command;

use std::collections::BTreeSet;

use quickcheck_macros::quickcheck;

use crate::Op;

/// Renders operations as the command-line tokens the parser understands.
fn to_line(ops: &[Op<i16>], traversal: &str) -> String {
    let mut line = String::new();
    for op in ops {
        match op {
            Op::Insert(x) => line.push_str(&format!("A{x} ")),
            Op::Remove(x) => line.push_str(&format!("D{x} ")),
        }
    }
    line.push_str(traversal);
    line
}

#[quickcheck]
fn in_order_output_is_the_sorted_distinct_set(ops: Vec<Op<i16>>) -> bool {
    let mut set = BTreeSet::new();
    for op in &ops {
        match op {
            Op::Insert(x) => {
                set.insert(*x);
            }
            Op::Remove(x) => {
                set.remove(x);
            }
        }
    }

    let expected = if set.is_empty() {
        "EMPTY".to_string()
    } else {
        set.iter()
            .map(i16::to_string)
            .collect::<Vec<_>>()
            .join(" ")
    };

    let output = command::run_line(&to_line(&ops, "IN")).unwrap();
    output.as_deref() == Some(expected.as_str())
}

#[quickcheck]
fn deleting_every_inserted_value_reports_empty(xs: Vec<i16>) -> bool {
    let mut ops: Vec<_> = xs.iter().copied().map(Op::Insert).collect();
    ops.extend(xs.iter().copied().map(Op::Remove));

    let output = command::run_line(&to_line(&ops, "IN")).unwrap();
    output.as_deref() == Some("EMPTY")
}
