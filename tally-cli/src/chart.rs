use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    style::{Color, Style},
    symbols,
    text::Span,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType},
    Terminal,
};
use std::io::{self, Stdout};
use tally_core::{format_date, DayPoint};

/// Draw the per-day income and expense lines for a reported range, in an
/// alternate screen. Returns once the user presses any key.
pub fn show(series: &[DayPoint]) -> Result<()> {
    if series.is_empty() {
        println!("Nothing to chart");
        return Ok(());
    }

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = chart_loop(&mut terminal, series);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn chart_loop(terminal: &mut Terminal<CrosstermBackend<Stdout>>, series: &[DayPoint]) -> Result<()> {
    let income: Vec<(f64, f64)> = series
        .iter()
        .enumerate()
        .map(|(i, p)| (i as f64, p.income))
        .collect();
    let expense: Vec<(f64, f64)> = series
        .iter()
        .enumerate()
        .map(|(i, p)| (i as f64, p.expense))
        .collect();

    let max_y = series
        .iter()
        .map(|p| p.income.max(p.expense))
        .fold(0.0_f64, f64::max)
        .max(1.0);
    let x_max = (series.len() - 1).max(1) as f64;

    loop {
        terminal.draw(|f| {
            let datasets = vec![
                Dataset::default()
                    .name("Income")
                    .marker(symbols::Marker::Braille)
                    .graph_type(GraphType::Line)
                    .style(Style::default().fg(Color::Green))
                    .data(&income),
                Dataset::default()
                    .name("Expense")
                    .marker(symbols::Marker::Braille)
                    .graph_type(GraphType::Line)
                    .style(Style::default().fg(Color::Red))
                    .data(&expense),
            ];

            let chart = Chart::new(datasets)
                .block(
                    Block::default()
                        .title("Income & expenses over time (press any key to close)")
                        .borders(Borders::ALL),
                )
                .x_axis(
                    Axis::default()
                        .title("Date")
                        .bounds([0.0, x_max])
                        .labels(vec![
                            Span::raw(format_date(series[0].date)),
                            Span::raw(format_date(series[series.len() - 1].date)),
                        ]),
                )
                .y_axis(
                    Axis::default()
                        .title("Amount")
                        .bounds([0.0, max_y])
                        .labels(vec![
                            Span::raw("0"),
                            Span::raw(format!("{:.0}", max_y / 2.0)),
                            Span::raw(format!("{:.0}", max_y)),
                        ]),
                );

            f.render_widget(chart, f.area());
        })?;

        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                return Ok(());
            }
        }
    }
}
