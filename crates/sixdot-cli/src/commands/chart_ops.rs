use serde::Serialize;

use sixdot_core::Chord;

#[derive(Serialize)]
struct ChartRow {
    bits: u8,
    dots: String,
    cell: char,
    codepoint: String,
}

fn chart_rows() -> Vec<ChartRow> {
    (1u8..=0x3F)
        .map(|bits| {
            // 1..=0x3F always forms a valid, non-empty chord.
            let chord = Chord::from_bits(bits).expect("bits in range");
            ChartRow {
                bits,
                dots: chord.dot_numbers(),
                cell: chord.to_cell().expect("non-empty chord"),
                codepoint: format!("U+{:04X}", 0x2800 + bits as u32),
            }
        })
        .collect()
}

/// Print the chord → cell chart: every committable bit-set with its dot
/// numbers, glyph, and codepoint.
pub fn chart(json: bool) {
    let rows = chart_rows();
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&rows).expect("chart serializes")
        );
        return;
    }
    println!("bits  dots    cell  codepoint");
    for row in rows {
        println!(
            "0x{:02X}  {:<6}  {}     {}",
            row.bits, row.dots, row.cell, row.codepoint
        );
    }
}
