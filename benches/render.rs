use criterion::{Criterion, black_box, criterion_group, criterion_main};
use boxtable::{Alignment, BorderConfig, ColumnConfig, Table, TableConfig};

const REMARKS: &str = "Orbital insertion at around 15:36 UTC on 14 August. Deorbited early due \
to lack of fuel and to avoid communications interference with the next mission.";

fn sample_rows(count: usize) -> Vec<Vec<String>> {
    let mut rows = vec![vec![
        "\x1b[1mSpacecraft\x1b[0m".to_string(),
        "\x1b[1mLaunch Date\x1b[0m".to_string(),
        "\x1b[1mOutcome\x1b[0m".to_string(),
        "\x1b[1mRemarks\x1b[0m".to_string(),
    ]];
    for i in 0..count {
        rows.push(vec![
            format!("Lunar Orbiter {i}"),
            format!("{} August 1966", 1 + i % 28),
            "\x1b[30;43m Partial failure \x1b[0m".to_string(),
            REMARKS.to_string(),
        ]);
    }
    rows
}

fn sample_table() -> Table {
    let mut config = TableConfig::new().with_border(BorderConfig::honeywell());
    for column in 0..3 {
        config = config.with_column(column, ColumnConfig::new().padding(1));
    }
    config = config.with_column(
        3,
        ColumnConfig::new()
            .padding(1)
            .max_width(50)
            .alignment(Alignment::Left),
    );
    Table::new(config)
}

fn render_wrapped_table(c: &mut Criterion) {
    let table = sample_table();
    let rows = sample_rows(50);
    c.bench_function("render_wrapped_table", |b| {
        b.iter(|| table.render(black_box(&rows)).expect("render"));
    });
}

fn layout_only(c: &mut Criterion) {
    let table = sample_table();
    let rows = sample_rows(50);
    c.bench_function("layout_only", |b| {
        b.iter(|| table.layout(black_box(&rows)).expect("layout"));
    });
}

criterion_group!(benches, render_wrapped_table, layout_only);
criterion_main!(benches);
