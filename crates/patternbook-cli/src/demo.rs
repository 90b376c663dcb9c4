//! Fixed console sequences, one per pattern.
//!
//! Expected failures inside a demonstration (a rejected state transition, an
//! unknown factory kind) are reported and the sequence carries on.

use patternbook_core::{
    abstract_factory::FurnitureManufacturer,
    builder::{Director, StandardComputerBuilder},
    command::{Light, LightCommand, RemoteControl},
    config::Config,
    factory_method::{VehicleManufacturer, VehicleSpec},
    log,
    log::Topic,
    observer::{MobileApp, NewsAgency, NewsChannel, NewsWebsite},
    prototype::{Document, DocumentRegistry, Report, Resume},
    singleton::Logger,
    state::MusicPlayer,
    strategy::{Amount, CreditCardPayment, PayPalPayment, PaymentContext},
};
use std::cell::RefCell;

pub fn all() {
    command();
    strategy();
    builder();
    singleton();
    state();
    observer();
    factory_method();
    abstract_factory();
    prototype();
}

pub fn command() {
    log!(Topic::Command, Info, "🔘 Command Pattern Example - Smart Light Remote");

    let light = RefCell::new(Light::new());
    let mut remote = RemoteControl::new();

    log!(Topic::Command, Info, "📱 Initial state:");
    light.borrow().report();

    log!(Topic::Command, Info, "🔄 Testing normal operations:");
    remote.submit(LightCommand::activate(&light));
    light.borrow().report();

    remote.submit(LightCommand::deactivate(&light));
    light.borrow().report();

    log!(Topic::Command, Info, "🔄 Testing undo functionality:");
    remote.undo_last();
    light.borrow().report();

    // slot was cleared by the previous undo
    remote.undo_last();
    light.borrow().report();

    log!(Topic::Command, Ok, "✅ Command Pattern example completed!");
}

pub fn strategy() {
    log!(Topic::Strategy, Info, "💳 Strategy Pattern Example - Payment System");

    let amount = Amount::from_cents(Config::get().strategy.amount_cents);
    let mut context = PaymentContext::new();
    log!(Topic::Strategy, Info, "💰 Processing payment of {amount}");

    if let Err(err) = context.process(amount) {
        log!(Topic::Strategy, Warn, "🚫 {err}");
    }

    match CreditCardPayment::new("1234567890123456", "John Doe", "123") {
        Ok(card) => context.set_strategy(card),
        Err(err) => log!(Topic::Strategy, Error, "{err}"),
    }
    if let Err(err) = context.process(amount) {
        log!(Topic::Strategy, Warn, "🚫 {err}");
    }

    match PayPalPayment::new("john.doe@example.com") {
        Ok(paypal) => context.set_strategy(paypal),
        Err(err) => log!(Topic::Strategy, Error, "{err}"),
    }
    if let Err(err) = context.process(amount) {
        log!(Topic::Strategy, Warn, "🚫 {err}");
    }

    log!(Topic::Strategy, Ok, "✅ Strategy Pattern example completed!");
}

pub fn builder() {
    log!(Topic::Builder, Info, "🛠️ Builder Pattern Example - Computer Assembly");

    let mut builder = StandardComputerBuilder::new();
    for result in [
        Director::construct_gaming_pc(&mut builder),
        Director::construct_office_pc(&mut builder),
    ] {
        if let Err(err) = result {
            log!(Topic::Builder, Error, "{err}");
        }
    }

    log!(Topic::Builder, Ok, "✅ Builder Pattern example completed!");
}

pub fn singleton() {
    log!(Topic::Singleton, Info, "🔒 Singleton Pattern Example - Shared Logger");

    if let Err(err) = Logger::init(Config::get().singleton.prefix.clone()) {
        log!(Topic::Singleton, Debug, "{err}");
    }

    let first = Logger::global();
    let second = Logger::global();
    first.log("Hello, world!");

    log!(Topic::Singleton, Info, "logger1 address: {first:p}");
    log!(Topic::Singleton, Info, "logger2 address: {second:p}");
    log!(
        Topic::Singleton,
        Info,
        "Is same instance: {}",
        std::ptr::eq(first, second)
    );
}

pub fn state() {
    log!(Topic::State, Info, "🎵 State Pattern Example - Music Player");

    let mut player = MusicPlayer::new("Jay Chou - Blue and White Porcelain");
    log!(Topic::State, Info, "📱 Initial state: {}", player.state());

    // normal flow, then every rejected action
    let steps = [
        MusicPlayer::play,
        MusicPlayer::pause,
        MusicPlayer::play,
        MusicPlayer::stop,
        MusicPlayer::stop,
        MusicPlayer::pause,
        MusicPlayer::play,
        MusicPlayer::play,
        MusicPlayer::pause,
        MusicPlayer::pause,
    ];
    for step in steps {
        // rejections are already reported by the player
        let _ = step(&mut player);
    }

    log!(Topic::State, Ok, "✅ State Pattern example completed!");
}

pub fn observer() {
    log!(Topic::Observer, Info, "📰 Observer Pattern Example - News Publishing System");

    let mut agency = NewsAgency::new();
    agency.attach(NewsChannel::new("cnn", "CNN"));
    agency.attach(NewsChannel::new("bbc", "BBC"));
    agency.attach(NewsWebsite::new("reuters", "Reuters", "https://reuters.com"));
    agency.attach(MobileApp::new("news_app", "Breaking News App", 1_000_000));

    for news in [
        "Global tech conference announces breakthrough in AI technology",
        "New environmental policy aims to reduce carbon emissions by 50%",
        "SpaceX successfully launches new satellite constellation",
    ] {
        agency.publish(news);
    }

    agency.detach("bbc");
    let notified = agency.publish("Breaking: Major sports event postponed due to weather");
    log!(Topic::Observer, Info, "notified {notified} observers");

    log!(Topic::Observer, Ok, "✅ Observer Pattern example completed!");
}

pub fn factory_method() {
    log!(Topic::FactoryMethod, Info, "🏭 Factory Method Pattern Example - Vehicle Manufacturing");

    let manufacturer = VehicleManufacturer::new();
    for (kind, name) in manufacturer.available() {
        log!(Topic::FactoryMethod, Info, "  - {kind}: {name}");
    }

    let orders = [
        ("car", VehicleSpec::new("Volkswagen", "Golf", 2024)),
        ("motorcycle", VehicleSpec::new("BMW", "R1200GS", 2024)),
        ("truck", VehicleSpec::new("Volvo", "FH16", 2024)),
        ("hovercraft", VehicleSpec::new("Griffon", "2000TD", 2024)),
    ];

    // unknown kinds are reported by the manufacturer
    let vehicles: Vec<_> = orders
        .into_iter()
        .filter_map(|(kind, spec)| manufacturer.manufacture(kind, spec).ok())
        .collect();

    for vehicle in &vehicles {
        log!(Topic::FactoryMethod, Info, "📋 {}", vehicle.info());
        vehicle.start_engine();
        vehicle.stop_engine();
    }

    log!(Topic::FactoryMethod, Ok, "✅ Factory Method Pattern example completed!");
}

pub fn abstract_factory() {
    log!(Topic::AbstractFactory, Info, "🏭 Abstract Factory Pattern Example - Furniture");

    let manufacturer = FurnitureManufacturer::new();
    for (style, name) in manufacturer.available() {
        log!(Topic::AbstractFactory, Info, "  - {style}: {name}");
    }

    let orders = [("modern", "Leather", "Black"), ("victorian", "Wood", "Brown")];
    for (style, material, color) in orders {
        let Ok(set) = manufacturer.furniture_set(style, material, color) else {
            continue;
        };

        log!(Topic::AbstractFactory, Info, "📋 {} furniture set", style.to_uppercase());
        log!(Topic::AbstractFactory, Info, "📋 {}", set.chair.info());
        set.chair.sit_on();
        log!(Topic::AbstractFactory, Info, "📋 {}", set.table.info());
        set.table.put_on();
        log!(Topic::AbstractFactory, Info, "📋 {}", set.sofa.info());
        set.sofa.lie_on();
    }

    log!(Topic::AbstractFactory, Ok, "✅ Abstract Factory Pattern example completed!");
}

pub fn prototype() {
    log!(Topic::Prototype, Info, "📄 Prototype Pattern Example - Document Templates");

    let mut registry = DocumentRegistry::new();
    registry.register(
        "Resume Template",
        Document::Resume(
            Resume::new("John Doe", 28)
                .with_experience("ABC Corp - Software Engineer (2020-2023)")
                .with_experience("XYZ Inc - Junior Developer (2018-2020)")
                .with_skill("Rust")
                .with_skill("Python")
                .with_skill("JavaScript"),
        ),
    );
    registry.register(
        "Report Template",
        Document::Report(
            Report::new("Q4 Sales Report", "Sales Department", "2025-12-31")
                .with_content("This quarter's sales have reached the target..."),
        ),
    );

    for (name, title) in registry.list() {
        log!(Topic::Prototype, Info, "  - {name}: {title}");
    }

    if let Some(mut doc) = registry.create("Resume Template") {
        if let Some(resume) = doc.as_resume_mut() {
            resume.name = "Jane Smith".to_string();
            resume
                .experience
                .push("New Corp - Senior Engineer (2023-Present)".to_string());
            resume.skills.push("Go".to_string());
        }
        doc.display();
    }

    if let Some(mut doc) = registry.create("Report Template") {
        if let Some(report) = doc.as_report_mut() {
            report.title = "Annual Technical Report".to_string();
            report.content = "Annual technical development summary...".to_string();
        }
        doc.display();
    }

    // templates are untouched by the edits above
    if let Some(template) = registry.template("Resume Template") {
        template.display();
    }

    log!(Topic::Prototype, Ok, "✅ Prototype Pattern example completed!");
}
