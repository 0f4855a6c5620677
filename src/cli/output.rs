//! Output formatting utilities

use crate::domain::atm::{AccountEntry, EntryKind};
use crate::domain::finance::{FinanceSummary, Transaction, TransactionKind};
use crate::domain::hospital::{Appointment, Doctor};
use crate::domain::inventory::{InventorySummary, Product, Sale};
use crate::domain::library::Book;
use crate::domain::weather::WeatherReport;

const RULE: &str = "-----------------------------------";

/// Format an amount as dollars with thousands separators, e.g. `$1,234.50`
pub fn format_money(amount: f64) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = (cents / 100).to_string();
    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    format!("{}${}.{:02}", sign, grouped, cents % 100)
}

pub fn format_doctor_list(doctors: &[Doctor]) -> String {
    if doctors.is_empty() {
        return "No doctors are currently registered".to_string();
    }

    let mut output = String::new();
    for doc in doctors {
        output.push_str(&format!("ID: {} | Name: {}\n", doc.id, doc.name));
        output.push_str(&format!("  Specialization: {}\n", doc.specialization));
        output.push_str(&format!("  Availability: {}\n", doc.timings));
        output.push_str(RULE);
        output.push('\n');
    }
    output
}

pub fn format_appointment_list(appointments: &[Appointment]) -> String {
    if appointments.is_empty() {
        return "No appointments have been booked yet".to_string();
    }

    let mut output = String::new();
    for app in appointments {
        output.push_str(&format!("ID: {} | Status: {}\n", app.id, app.status));
        output.push_str(&format!("  Time: {}\n", app.time));
        output.push_str(&format!(
            "  Doctor: Dr. {} (ID: {})\n",
            app.doctor_name, app.doctor_id
        ));
        output.push_str(&format!("  Patient: {}\n", app.patient));
        output.push_str(RULE);
        output.push('\n');
    }
    output
}

pub fn format_product_list(products: &[Product]) -> String {
    if products.is_empty() {
        return "Inventory is empty. Please add some products.".to_string();
    }

    let mut output = String::new();
    for p in products {
        output.push_str(&format!(
            "{} (ID: {}) | Price: {} | Stock: {}\n",
            p.name,
            p.id,
            format_money(p.price),
            p.quantity
        ));
    }
    output
}

pub fn format_purchase(sale: &Sale, remaining: u64) -> String {
    format!(
        "Purchase Successful!\n  Item: {}\n  Quantity: {}\n  Total Cost: {}\n  Remaining Stock: {}\n",
        sale.product_name,
        sale.quantity,
        format_money(sale.amount),
        remaining
    )
}

pub fn format_inventory_summary(summary: &InventorySummary) -> String {
    format!(
        "Total Earnings (from sales): {}\nTotal Current Stock Value:   {}\n",
        format_money(summary.total_earnings),
        format_money(summary.stock_value)
    )
}

pub fn format_finance_summary(summary: &FinanceSummary) -> String {
    let status = if summary.net_balance >= 0.0 {
        "Positive"
    } else {
        "Negative"
    };
    format!(
        "Total Income:         +{}\n\
         Total Expenses:       -{}\n\
         {}\n\
         Net Balance:          {} ({})\n\
         Total Transactions:   {}\n",
        format_money(summary.total_income),
        format_money(summary.total_expenses),
        RULE,
        format_money(summary.net_balance),
        status,
        summary.total_transactions
    )
}

pub fn format_transaction_list(transactions: &[Transaction]) -> String {
    if transactions.is_empty() {
        return "No transactions recorded".to_string();
    }

    let mut output = String::new();
    for t in transactions {
        let sign = match t.kind {
            TransactionKind::Income => '+',
            TransactionKind::Expense => '-',
        };
        output.push_str(&format!(
            "{:>4}  {}  {}{:<12}  {}\n",
            t.id,
            t.date,
            sign,
            format_money(t.amount),
            t.description
        ));
    }
    output
}

pub fn format_account_history(entries: &[&AccountEntry]) -> String {
    if entries.is_empty() {
        return "No transactions on this account".to_string();
    }

    let mut output = String::new();
    for e in entries {
        let label = match e.kind {
            EntryKind::Deposit => "Deposit   ",
            EntryKind::Withdrawal => "Withdrawal",
        };
        output.push_str(&format!(
            "{}  {}  {:>12}  balance {}\n",
            e.time,
            label,
            format_money(e.amount),
            format_money(e.balance_after)
        ));
    }
    output
}

pub fn format_book_list(books: &[Book]) -> String {
    if books.is_empty() {
        return "The library is empty!".to_string();
    }

    let mut output = format!("{:<30} | {:<16}\n{}\n", "Title", "Copies Available", "-".repeat(48));
    for book in books {
        let status = if book.copies == 0 {
            " (Out of Stock)"
        } else {
            ""
        };
        output.push_str(&format!("{:<30} | {:<16}{}\n", book.title, book.copies, status));
    }
    output
}

pub fn format_weather(report: &WeatherReport) -> String {
    let c = &report.conditions;
    format!(
        "Weather in {}\n\
         Temperature: {}°C\n\
         Wind Speed: {} km/h\n\
         Wind Direction: {}\n\
         Last Updated: {}\n",
        report.location.display_name(),
        c.temperature,
        c.windspeed,
        c.wind_direction(),
        c.updated_at()
    )
}
