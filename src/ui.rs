use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, List, ListItem, ListState, Paragraph, Row, Table, TableState, Tabs, Wrap},
    Frame, Terminal,
};

use chic_storefront::{
    finance::{FinanceCalculator, FinancePlan, FINANCE_PLANS},
    store::{listing::ProductListing, DataStore},
    warranty::WARRANTY_POLICIES,
    Config,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Finance,
    Schedule,
    Products,
    Warranty,
}

impl Screen {
    const ALL: [Screen; 4] = [Screen::Finance, Screen::Schedule, Screen::Products, Screen::Warranty];

    fn next(self) -> Self {
        match self {
            Screen::Finance => Screen::Schedule,
            Screen::Schedule => Screen::Products,
            Screen::Products => Screen::Warranty,
            Screen::Warranty => Screen::Finance,
        }
    }

    fn title(self) -> &'static str {
        match self {
            Screen::Finance => "Finance",
            Screen::Schedule => "Schedule",
            Screen::Products => "Products",
            Screen::Warranty => "Warranty",
        }
    }
}

pub struct App {
    screen: Screen,
    config: Config,
    calculator: FinanceCalculator,
    plan_state: ListState,
    schedule_state: TableState,
    store: std::result::Result<DataStore, String>,
    listing: ProductListing,
    product_state: TableState,
    show_detail: bool,
    warranty_state: ListState,
    status: String,
}

impl App {
    pub fn new(config: Config, store: std::result::Result<DataStore, String>) -> Self {
        let mut plan_state = ListState::default();
        plan_state.select(Some(0));
        let mut warranty_state = ListState::default();
        warranty_state.select(Some(0));

        Self {
            screen: Screen::Finance,
            config,
            calculator: FinanceCalculator::new(),
            plan_state,
            schedule_state: TableState::default(),
            store,
            listing: ProductListing::default(),
            product_state: TableState::default(),
            show_detail: false,
            warranty_state,
            status: String::new(),
        }
    }

    fn highlighted_plan(&self) -> &'static FinancePlan {
        let index = self.plan_state.selected().unwrap_or(0).min(FINANCE_PLANS.len() - 1);
        &FINANCE_PLANS[index]
    }

    fn export_schedule(&mut self) {
        let path = self.config.export_file.clone();
        self.status = match self.calculator.export_csv(&path) {
            Ok(()) => format!("Exported to {}", path.display()),
            Err(e) => {
                tracing::warn!(error = %e, "schedule export failed");
                format!("Error exporting to CSV: {e}")
            }
        };
    }
}

pub fn run_app<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| ui(f, &mut app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if key.code == KeyCode::Char('q') || key.code == KeyCode::Char('Q') {
                return Ok(());
            }
            if key.code == KeyCode::Tab {
                app.screen = app.screen.next();
                app.status.clear();
                continue;
            }

            match app.screen {
                Screen::Finance => handle_finance_input(&mut app, key),
                Screen::Schedule => handle_schedule_input(&mut app, key),
                Screen::Products => handle_products_input(&mut app, key),
                Screen::Warranty => handle_warranty_input(&mut app, key),
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Input
// ---------------------------------------------------------------------------

fn cycle<T: PartialEq + Copy>(items: &[T], current: T) -> Option<T> {
    let index = items.iter().position(|i| *i == current).map_or(0, |i| i + 1);
    items.get(index % items.len().max(1)).copied()
}

fn move_list(state: &mut ListState, len: usize, down: bool) {
    if len == 0 {
        return;
    }
    let current = state.selected().unwrap_or(0);
    let next = if down { (current + 1).min(len - 1) } else { current.saturating_sub(1) };
    state.select(Some(next));
}

fn move_table(state: &mut TableState, len: usize, down: bool) {
    if len == 0 {
        state.select(None);
        return;
    }
    let current = state.selected().unwrap_or(0);
    let next = if down { (current + 1).min(len - 1) } else { current.saturating_sub(1) };
    state.select(Some(next));
}

fn handle_finance_input(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('b') => {
            let current = app.calculator.state().brand;
            if let Some(brand) = cycle(app.calculator.brands(), current) {
                app.calculator.change_brand(brand);
            }
        }
        KeyCode::Char('m') => {
            let models = app.calculator.brand_models();
            let current = app.calculator.state().model;
            let next = match current {
                Some(model) => cycle(&models, model),
                None => models.first().copied(),
            };
            if let Some(model) = next {
                app.calculator.change_model(model.name);
            }
        }
        KeyCode::Down | KeyCode::Char('j') => move_list(&mut app.plan_state, FINANCE_PLANS.len(), true),
        KeyCode::Up | KeyCode::Char('k') => move_list(&mut app.plan_state, FINANCE_PLANS.len(), false),
        KeyCode::Enter | KeyCode::Char('u') => {
            let plan = app.highlighted_plan();
            app.calculator.select_plan(plan);
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Left | KeyCode::Char('h') => {
            let plan = app.highlighted_plan();
            let current = app.calculator.input().term_months;
            let forward = matches!(key.code, KeyCode::Right | KeyCode::Char('l'));
            let term = if forward {
                plan.terms.iter().copied().find(|t| *t > current)
            } else {
                plan.terms.iter().rev().copied().find(|t| *t < current)
            };
            if let Some(term) = term {
                app.calculator.select_term(plan, term);
            } else if app.calculator.state().plan_partner != Some(plan.partner) {
                app.calculator.select_plan(plan);
            }
        }
        KeyCode::Char('s') => {
            app.screen = Screen::Schedule;
            app.schedule_state.select(Some(0));
        }
        _ => {}
    }
}

fn handle_schedule_input(app: &mut App, key: KeyEvent) {
    let len = app.calculator.schedule().len();
    match key.code {
        KeyCode::Esc | KeyCode::Char('h') | KeyCode::Left => app.screen = Screen::Finance,
        KeyCode::Char('e') | KeyCode::Char('E') => app.export_schedule(),
        KeyCode::Down | KeyCode::Char('j') => move_table(&mut app.schedule_state, len, true),
        KeyCode::Up | KeyCode::Char('k') => move_table(&mut app.schedule_state, len, false),
        KeyCode::Char('g') => app.schedule_state.select(Some(0)),
        KeyCode::Char('G') => app.schedule_state.select(len.checked_sub(1)),
        _ => {}
    }
}

fn handle_products_input(app: &mut App, key: KeyEvent) {
    let Ok(store) = &app.store else {
        return;
    };
    let page = store.product_list_page();

    match key.code {
        KeyCode::Char('c') => {
            let ids: Vec<&str> = page.categories.iter().map(|c| c.id.as_str()).collect();
            let next = cycle(&ids, app.listing.category.as_str()).unwrap_or_default().to_string();
            app.listing.filter_by_category(&next);
            app.product_state.select(Some(0));
        }
        KeyCode::Char('b') => {
            let ids: Vec<&str> = page.brands.iter().map(|b| b.id.as_str()).collect();
            let next = cycle(&ids, app.listing.brand.as_str()).unwrap_or_default().to_string();
            app.listing.filter_by_brand(&next);
            app.product_state.select(Some(0));
        }
        KeyCode::Char('x') => {
            app.listing = ProductListing::default();
            app.product_state.select(Some(0));
        }
        KeyCode::Right | KeyCode::Char('l') => {
            if app.listing.current_page < app.listing.total_pages(page.products) {
                app.listing.change_page(app.listing.current_page + 1);
                app.product_state.select(Some(0));
            }
        }
        KeyCode::Left | KeyCode::Char('h') => {
            if app.listing.current_page > 1 {
                app.listing.change_page(app.listing.current_page - 1);
                app.product_state.select(Some(0));
            }
        }
        KeyCode::Down | KeyCode::Char('j') => {
            let len = app.listing.visible(page.products).len();
            move_table(&mut app.product_state, len, true);
        }
        KeyCode::Up | KeyCode::Char('k') => {
            let len = app.listing.visible(page.products).len();
            move_table(&mut app.product_state, len, false);
        }
        KeyCode::Enter => app.show_detail = !app.show_detail,
        KeyCode::Esc => app.show_detail = false,
        _ => {}
    }
}

fn handle_warranty_input(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Down | KeyCode::Char('j') => move_list(&mut app.warranty_state, WARRANTY_POLICIES.len(), true),
        KeyCode::Up | KeyCode::Char('k') => move_list(&mut app.warranty_state, WARRANTY_POLICIES.len(), false),
        _ => {}
    }
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

fn money(amount: f64) -> String {
    format!("${amount:.2}")
}

fn ui(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0), Constraint::Length(3)].as_ref())
        .split(f.size());

    let titles: Vec<&str> = Screen::ALL.iter().map(|s| s.title()).collect();
    let selected = Screen::ALL.iter().position(|s| *s == app.screen).unwrap_or(0);
    let tabs = Tabs::new(titles)
        .block(Block::default().borders(Borders::ALL).title("Chic Lighting & Design"))
        .select(selected)
        .style(Style::default().fg(Color::DarkGray))
        .highlight_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));
    f.render_widget(tabs, chunks[0]);

    let help = match app.screen {
        Screen::Finance => "b: brand | m: model | j/k: plan | Enter: use plan | h/l: term | s: schedule | Tab: next | q: quit",
        Screen::Schedule => "j/k or ↑/↓: navigate | g/G: top/bottom | e: export CSV | h/←: back | q: quit",
        Screen::Products => "c: category | b: brand | x: clear | h/l: page | j/k: select | Enter: details | q: quit",
        Screen::Warranty => "j/k or ↑/↓: select brand | Tab: next | q: quit",
    };

    match app.screen {
        Screen::Finance => render_finance_screen(f, app, chunks[1]),
        Screen::Schedule => render_schedule_screen(f, app, chunks[1]),
        Screen::Products => render_products_screen(f, app, chunks[1]),
        Screen::Warranty => render_warranty_screen(f, app, chunks[1]),
    }

    let footer = if app.status.is_empty() { help.to_string() } else { app.status.clone() };
    let help = Paragraph::new(footer)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::TOP));
    f.render_widget(help, chunks[2]);
}

fn label(text: &str) -> Span<'_> {
    Span::styled(text, Style::default().add_modifier(Modifier::BOLD))
}

fn render_finance_screen(f: &mut Frame, app: &mut App, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)].as_ref())
        .split(area);
    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(6), Constraint::Min(0)].as_ref())
        .split(columns[0]);

    let state = app.calculator.state();
    let vehicle = vec![
        Line::from(vec![label("Brand: "), Span::styled(state.brand, Style::default().fg(Color::Yellow))]),
        Line::from(vec![
            label("Model: "),
            Span::styled(state.model.map_or("-", |m| m.name), Style::default().fg(Color::Yellow)),
        ]),
        Line::from(vec![label("Price: "), Span::raw(money(app.calculator.input().price))]),
        Line::from(vec![
            label("Plan: "),
            Span::raw(state.plan_partner.unwrap_or("none")),
            Span::raw(state.term.map(|t| format!(" / {t} months")).unwrap_or_default()),
        ]),
    ];
    f.render_widget(
        Paragraph::new(vehicle).block(Block::default().borders(Borders::ALL).title("Vehicle")),
        left[0],
    );

    let active = state.plan_partner;
    let items: Vec<ListItem> = app
        .calculator
        .plans()
        .iter()
        .map(|plan| {
            let terms = plan.terms.iter().map(|t| t.to_string()).collect::<Vec<_>>().join("/");
            let fee = plan.processing_fee.map(|fee| format!(", fee {}", money(fee))).unwrap_or_default();
            let marker = if active == Some(plan.partner) { "● " } else { "  " };
            ListItem::new(vec![
                Line::from(format!("{marker}{} - {:.2}% APR, min {:.0}% down", plan.partner, plan.apr, plan.min_down_percent)),
                Line::from(Span::styled(
                    format!("    terms {terms}{fee}. {}", plan.notes.unwrap_or_default()),
                    Style::default().fg(Color::DarkGray),
                )),
            ])
        })
        .collect();
    let plans = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("Finance Plans"))
        .highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol(">> ");
    f.render_stateful_widget(plans, left[1], &mut app.plan_state);

    let input = app.calculator.input();
    let summary = match app.calculator.results() {
        Some(result) => vec![
            Line::from(vec![label("Down Payment: "), Span::raw(format!("{} ({:.0}%)", money(result.down_payment), input.effective_down_percent()))]),
            Line::from(vec![label("APR: "), Span::raw(format!("{:.2}%", input.apr))]),
            Line::from(vec![label("Term: "), Span::raw(format!("{} months", input.periods()))]),
            Line::from(""),
            Line::from(vec![
                label("Principal: "),
                Span::styled(money(result.principal), Style::default().fg(Color::Green)),
            ]),
            Line::from(vec![
                label("Monthly Payment: "),
                Span::styled(money(result.monthly_payment), Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
            ]),
            Line::from(vec![label("Total Payment: "), Span::raw(money(result.total_payment))]),
            Line::from(vec![
                label("Total Interest: "),
                Span::styled(money(result.total_interest), Style::default().fg(Color::Red)),
            ]),
        ],
        None => vec![Line::from("No calculation yet")],
    };
    f.render_widget(
        Paragraph::new(summary).block(Block::default().borders(Borders::ALL).title("Loan Summary")),
        columns[1],
    );
}

fn render_schedule_screen(f: &mut Frame, app: &mut App, area: Rect) {
    let header = Row::new(vec!["Month", "Payment", "Interest", "Principal", "Balance"])
        .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
        .height(1);

    let rows = app.calculator.schedule().into_iter().map(|row| {
        Row::new(vec![
            Cell::from(row.month.to_string()),
            Cell::from(money(row.payment)),
            Cell::from(money(row.interest)),
            Cell::from(money(row.principal)),
            Cell::from(money(row.balance)),
        ])
        .height(1)
    });

    let widths = [
        Constraint::Length(6),
        Constraint::Length(14),
        Constraint::Length(14),
        Constraint::Length(14),
        Constraint::Length(16),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(Block::default().borders(Borders::ALL).title("Amortization Schedule"))
        .highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol(">> ");

    f.render_stateful_widget(table, area, &mut app.schedule_state);
}

fn render_products_screen(f: &mut Frame, app: &mut App, area: Rect) {
    let store = match &app.store {
        Ok(store) => store,
        Err(message) => {
            let error = Paragraph::new(message.as_str())
                .style(Style::default().fg(Color::Red))
                .wrap(Wrap { trim: true })
                .block(Block::default().borders(Borders::ALL).title("Products"));
            f.render_widget(error, area);
            return;
        }
    };

    let page = store.product_list_page();
    let query = store.products();
    let visible = app.listing.visible(page.products);
    let total_pages = app.listing.total_pages(page.products);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(if app.show_detail {
            [Constraint::Percentage(55), Constraint::Percentage(45)]
        } else {
            [Constraint::Percentage(100), Constraint::Percentage(0)]
        })
        .split(area);

    let rows = visible.iter().map(|p| {
        let price = if p.has_discount() {
            format!("{} (-{:.0}%)", money(p.effective_price()), p.discount.unwrap_or_default())
        } else {
            money(p.price)
        };
        Row::new(vec![
            Cell::from(p.name.clone()),
            Cell::from(query.brand_name(&p.brand_id).to_string()),
            Cell::from(price),
            Cell::from(if p.in_stock { "yes" } else { "no" }),
        ])
    });

    let filter = format!(
        "Products - category: {} | brand: {} | page {}/{}",
        if app.listing.category.is_empty() { "all" } else { &app.listing.category },
        if app.listing.brand.is_empty() { "all" } else { &app.listing.brand },
        app.listing.current_page,
        total_pages
    );
    let table = Table::new(
        rows,
        [Constraint::Percentage(45), Constraint::Percentage(20), Constraint::Percentage(25), Constraint::Percentage(10)],
    )
    .header(
        Row::new(vec!["Name", "Brand", "Price", "Stock"])
            .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
    )
    .block(Block::default().borders(Borders::ALL).title(filter))
    .highlight_style(Style::default().bg(Color::DarkGray))
    .highlight_symbol(">> ");
    f.render_stateful_widget(table, chunks[0], &mut app.product_state);

    if !app.show_detail {
        return;
    }

    let selected = app.product_state.selected().and_then(|i| visible.get(i));
    let detail = match selected.map(|p| store.product_detail_page(&p.id)) {
        Some(Ok(page)) => {
            let mut lines = vec![
                Line::from(vec![label("Name: "), Span::raw(page.product.name.clone())]),
                Line::from(vec![
                    label("Category: "),
                    Span::raw(page.category.map_or(page.product.category_id.clone(), |c| c.name.clone())),
                ]),
                Line::from(vec![label("Warranty: "), Span::raw(page.product.warranty.clone())]),
                Line::from(""),
                Line::from(page.product.description.clone()),
                Line::from(""),
            ];
            lines.extend(page.product.features.iter().map(|feat| Line::from(format!("• {feat}"))));
            if !page.related_products.is_empty() {
                lines.push(Line::from(""));
                lines.push(Line::from(label("Related:")));
                lines.extend(page.related_products.iter().map(|p| Line::from(format!("  {}", p.name))));
            }
            lines
        }
        Some(Err(e)) => vec![Line::from(format!("Cannot load product details: {e}"))],
        None => vec![Line::from("No product selected")],
    };
    f.render_widget(
        Paragraph::new(detail)
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL).title("Details")),
        chunks[1],
    );
}

fn render_warranty_screen(f: &mut Frame, app: &mut App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(20), Constraint::Min(0)].as_ref())
        .split(area);

    let items: Vec<ListItem> = WARRANTY_POLICIES.iter().map(|p| ListItem::new(p.brand)).collect();
    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("Brands"))
        .highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol(">> ");
    f.render_stateful_widget(list, chunks[0], &mut app.warranty_state);

    let index = app.warranty_state.selected().unwrap_or(0).min(WARRANTY_POLICIES.len() - 1);
    let policy = &WARRANTY_POLICIES[index];
    let mut lines = vec![
        Line::from(vec![label("Coverage: "), Span::raw(format!("{} years", policy.years))]),
        Line::from(vec![label("Rated life: "), Span::raw(format!("{} hours", policy.hours))]),
        Line::from(""),
        Line::from(policy.note),
        Line::from(""),
        Line::from(label("Extra services:")),
    ];
    lines.extend(policy.extra_services.iter().map(|s| Line::from(format!("• {s}"))));

    f.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL).title(policy.brand)),
        chunks[1],
    );
}
