use shape_bench::*;

fn report() -> ModuleReport {
    ModuleReport {
        module: "test".to_string(),
        params: ParamsSummary {
            width: 512,
            height: 600,
            quantity: 1000,
            repeat: 1,
            comp_op: CompOp::SrcOver,
            style: Style::Conic,
            stroke_width: 2.0,
        },
        sizes: vec![8, 16],
        records: vec![
            TestRecord {
                test: BenchTest::FillRectA,
                size: 8,
                outcome: Outcome::Measured { best_us: 1500 },
            },
            TestRecord {
                test: BenchTest::FillRectA,
                size: 16,
                outcome: Outcome::Measured { best_us: 12 },
            },
            TestRecord {
                test: BenchTest::StrokeStar,
                size: 8,
                outcome: Outcome::Skipped {
                    reason: "conic".to_string(),
                },
            },
        ],
    }
}

#[test]
fn table() {
    let table = render_table(&[report()]);
    let lines: Vec<&str> = table.lines().collect();

    assert!(lines[0].starts_with("test [512x600, quantity=1000, comp-op=src-over, style=conic]"));
    assert!(lines[1].starts_with("test"));
    assert!(lines[1].contains("8x8") && lines[1].contains("16x16"));

    assert!(lines[2].starts_with("fill-rect-a"));
    assert!(lines[2].contains("1.500"));
    assert!(lines[2].contains("0.012"));

    assert!(lines[3].starts_with("stroke-star"));
    // Skipped and missing cells.
    assert_eq!(lines[3].matches("N/A").count(), 2);
}

#[test]
fn json() {
    let json = to_json(&[report()]).unwrap();
    assert!(json.contains("\"outcome\": \"measured\""));
    assert!(json.contains("\"best_us\": 1500"));
    assert!(json.contains("\"outcome\": \"skipped\""));
    assert!(json.contains("\"comp-op\": \"src-over\""));

    let back: Vec<ModuleReport> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, vec![report()]);
}
