//! CLI demo entry point.
//!
//! # Responsibility
//! - Exercise the seller/department repositories end to end against a real
//!   SQLite file (first argument) or an in-memory database.
//! - Keep output deterministic for quick local sanity checks.
//!
//! Set `SELLERBOOK_LOG_DIR` to an absolute path to capture repository logs.

use chrono::NaiveDate;
use log::info;
use sellerbook_core::{
    core_version, default_log_level, init_logging, open_db, open_db_in_memory, Department,
    DepartmentDao, DepartmentRepository, Seller, SellerDao, SellerRepository,
};
use std::error::Error;
use std::process::ExitCode;
use std::sync::Arc;

const LOG_DIR_ENV: &str = "SELLERBOOK_LOG_DIR";

fn main() -> ExitCode {
    match run(std::env::args().nth(1)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("sellerbook: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(db_path: Option<String>) -> Result<(), Box<dyn Error>> {
    if let Ok(log_dir) = std::env::var(LOG_DIR_ENV) {
        init_logging(default_log_level(), &log_dir)?;
    }

    let conn = match db_path.as_deref() {
        Some(path) => open_db(path)?,
        None => open_db_in_memory()?,
    };
    info!(
        "event=cli_start module=cli status=ok db={} version={}",
        db_path.as_deref().unwrap_or(":memory:"),
        core_version()
    );

    let departments = DepartmentRepository::try_new(&conn)?;
    let sellers = SellerRepository::try_new(&conn)?;

    let mut computers = Department::new("Computers");
    departments.insert(&mut computers)?;
    let computers = Arc::new(computers);

    for (name, email, birth_date, base_salary) in [
        ("Martha Waine", "martha@gmail.com", date(1980, 3, 9)?, 3000.0),
        ("Bob Brown", "bob@gmail.com", date(1998, 4, 21)?, 1000.0),
        ("Alex Grey", "alex@gmail.com", date(1988, 1, 15)?, 2200.0),
    ] {
        let mut seller = Seller::new(name, email, birth_date, base_salary, Arc::clone(&computers));
        let id = sellers.insert(&mut seller)?;
        println!("inserted seller id={id} name={name}");
    }

    println!("== find_by_department({}) ==", computers.name);
    let by_department = sellers.find_by_department(&computers)?;
    for seller in &by_department {
        print_seller(seller);
    }
    if let [first, second, ..] = by_department.as_slice() {
        println!(
            "department shared between {} and {}: {}",
            first.name,
            second.name,
            first.shares_department_with(second)
        );
    }

    if let Some(mut bob) = by_department.into_iter().find(|seller| seller.name == "Bob Brown") {
        bob.base_salary = 1500.0;
        sellers.update(&bob)?;
        println!("updated seller id={} base_salary={}", display_id(bob.id), bob.base_salary);
    }

    println!("== find_all ==");
    for seller in sellers.find_all()? {
        print_seller(&seller);
    }

    if let Some(alex) = sellers
        .find_all()?
        .into_iter()
        .find(|seller| seller.name == "Alex Grey")
    {
        if let Some(id) = alex.id {
            sellers.delete_by_id(id)?;
            println!(
                "deleted seller id={id} still_present={}",
                sellers.find_by_id(id)?.is_some()
            );
        }
    }

    Ok(())
}

fn date(year: i32, month: u32, day: u32) -> Result<NaiveDate, String> {
    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| format!("invalid date {year}-{month}-{day}"))
}

fn display_id(id: Option<i64>) -> String {
    id.map(|id| id.to_string())
        .unwrap_or_else(|| "-".to_string())
}

fn print_seller(seller: &Seller) {
    println!(
        "seller id={} name={} email={} birth_date={} base_salary={:.2} department={}:{}",
        display_id(seller.id),
        seller.name,
        seller.email,
        seller.birth_date,
        seller.base_salary,
        display_id(seller.department.id),
        seller.department.name
    );
}
