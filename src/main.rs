use clap::Parser;
use storekeep::application::{
    init::init, AtmService, ConfigService, FinanceService, HospitalService, InventoryService,
    LibraryService, WeatherService,
};
use storekeep::cli::output::{
    format_account_history, format_appointment_list, format_book_list, format_doctor_list,
    format_finance_summary, format_inventory_summary, format_money, format_product_list,
    format_purchase, format_transaction_list, format_weather,
};
use storekeep::cli::{
    AtmCommand, Cli, Commands, FinanceCommand, HospitalCommand, InventoryCommand, LibraryCommand,
};
use storekeep::domain::inventory::StockChange;
use storekeep::domain::library::{ReturnOutcome, ShelfChange};
use storekeep::domain::Patient;
use storekeep::error::StorekeepError;
use storekeep::infrastructure::FileSystemRepository;
use storekeep::logging::init_logging;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), StorekeepError> {
    match cli.command {
        Commands::Init { path, empty } => init(&path, empty),
        Commands::Config { key, value, list } => {
            let repo = FileSystemRepository::discover()?;
            let service = ConfigService::new(repo);

            if list {
                for (k, v) in service.list()? {
                    println!("{} = {}", k, v);
                }
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                } else {
                    println!("{}", service.get(&k)?);
                }
                Ok(())
            } else {
                println!("Usage: storekeep config [--list | <key> [<value>]]");
                Ok(())
            }
        }
        Commands::Hospital(command) => run_hospital(command),
        Commands::Inventory(command) => run_inventory(command),
        Commands::Finance(command) => run_finance(command),
        Commands::Atm(command) => run_atm(command),
        Commands::Library(command) => run_library(command),
        Commands::Weather { city } => {
            let service = WeatherService::discover()?;
            let report = service.lookup(&city)?;
            print!("{}", format_weather(&report));
            Ok(())
        }
    }
}

fn run_hospital(command: HospitalCommand) -> Result<(), StorekeepError> {
    let repo = FileSystemRepository::discover()?;
    let mut service = HospitalService::open(&repo)?;

    match command {
        HospitalCommand::AddDoctor {
            name,
            specialization,
            timings,
        } => {
            let doctor = service.add_doctor(&name, &specialization, &timings)?;
            println!(
                "Doctor {} ({}) added with ID: {}",
                doctor.name, doctor.specialization, doctor.id
            );
        }
        HospitalCommand::Doctors => print_block(&format_doctor_list(service.doctors())),
        HospitalCommand::Book {
            doctor_id,
            patient,
            age,
            condition,
        } => {
            let patient = Patient::new(&patient, age, &condition)?;
            let appointment = service.book_appointment(doctor_id, &patient)?;
            println!("Appointment Booked Successfully!");
            println!("Appointment ID: {}", appointment.id);
            if let Some(doctor) = service.doctor(doctor_id) {
                println!("Doctor: Dr. {} ({})", doctor.name, doctor.specialization);
            }
            println!("Patient: {}", patient.name);
        }
        HospitalCommand::Appointments => {
            print_block(&format_appointment_list(service.appointments()))
        }
    }
    Ok(())
}

fn run_inventory(command: InventoryCommand) -> Result<(), StorekeepError> {
    let repo = FileSystemRepository::discover()?;
    let mut service = InventoryService::open(&repo)?;

    match command {
        InventoryCommand::Add {
            name,
            price,
            quantity,
        } => match service.add_product(&name, price, quantity)? {
            StockChange::Created(p) => {
                println!("New product '{}' added with ID: {}", p.name, p.id)
            }
            StockChange::Restocked(p) => println!(
                "Product already exists. Stock updated for '{}'. New quantity: {}",
                p.name, p.quantity
            ),
        },
        InventoryCommand::Purchase {
            product_id,
            quantity,
        } => {
            let (sale, remaining) = service.purchase(product_id, quantity)?;
            print!("{}", format_purchase(&sale, remaining));
        }
        InventoryCommand::Stock => print_block(&format_product_list(service.products())),
        InventoryCommand::Summary => print!("{}", format_inventory_summary(&service.summary())),
    }
    Ok(())
}

fn run_finance(command: FinanceCommand) -> Result<(), StorekeepError> {
    let repo = FileSystemRepository::discover()?;
    let mut service = FinanceService::open(&repo)?;

    match command {
        FinanceCommand::Add {
            kind,
            amount,
            description,
        } => {
            let t = service.add_transaction(kind, amount, &description)?;
            println!(
                "Recorded {} #{}: {} ({})",
                t.kind,
                t.id,
                format_money(t.amount),
                t.description
            );
        }
        FinanceCommand::Summary => print!("{}", format_finance_summary(&service.summary())),
        FinanceCommand::List => print_block(&format_transaction_list(service.transactions())),
    }
    Ok(())
}

fn run_atm(command: AtmCommand) -> Result<(), StorekeepError> {
    let repo = FileSystemRepository::discover()?;

    match command {
        AtmCommand::Balance { auth } => {
            let atm = AtmService::open(&repo, &auth.pin)?;
            println!("Your current balance is: {}", format_money(atm.balance()?));
        }
        AtmCommand::Deposit { auth, amount } => {
            let mut atm = AtmService::open(&repo, &auth.pin)?;
            let entry = atm.deposit(amount)?;
            println!("Successfully deposited {}.", format_money(entry.amount));
            println!(
                "Your current balance is: {}",
                format_money(entry.balance_after)
            );
        }
        AtmCommand::Withdraw { auth, amount } => {
            let mut atm = AtmService::open(&repo, &auth.pin)?;
            let entry = atm.withdraw(amount)?;
            println!("Successfully withdrew {}.", format_money(entry.amount));
            println!(
                "Your current balance is: {}",
                format_money(entry.balance_after)
            );
        }
        AtmCommand::History { auth } => {
            let atm = AtmService::open(&repo, &auth.pin)?;
            print_block(&format_account_history(&atm.history()));
        }
    }
    Ok(())
}

fn run_library(command: LibraryCommand) -> Result<(), StorekeepError> {
    let repo = FileSystemRepository::discover()?;
    let mut service = LibraryService::open(&repo)?;

    match command {
        LibraryCommand::List => print_block(&format_book_list(service.books())),
        LibraryCommand::Add { title, copies } => match service.add_book(&title, copies)? {
            ShelfChange::Created(book) => println!(
                "Book '{}' added to the inventory with {} copies.",
                book.title, book.copies
            ),
            ShelfChange::Restocked(book) => println!(
                "Added {} copies. Total copies of '{}': {}.",
                copies, book.title, book.copies
            ),
        },
        LibraryCommand::Borrow { title } => {
            let book = service.borrow(&title)?;
            println!(
                "You have borrowed '{}'. Copies left: {}",
                book.title, book.copies
            );
        }
        LibraryCommand::Return { title, add_missing } => {
            match service.return_book(&title, add_missing)? {
                ReturnOutcome::Returned(book) => println!(
                    "Thank you! '{}' has been returned. Copies available: {}",
                    book.title, book.copies
                ),
                ReturnOutcome::AddedToCatalogue(book) => println!(
                    "'{}' returned and added to inventory (1 copy).",
                    book.title
                ),
            }
        }
    }
    Ok(())
}

/// Print formatted output, adding a trailing newline where the formatter has none
fn print_block(text: &str) {
    if text.ends_with('\n') {
        print!("{}", text);
    } else {
        println!("{}", text);
    }
}
