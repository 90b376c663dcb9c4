use crate::{ThisError, log, log::Topic};
use derive_more::Display;
use std::{collections::BTreeMap, str::FromStr};

///
/// FactoryError
/// Shared by the factory method and abstract factory demonstrations.
///

#[derive(Debug, Eq, PartialEq, ThisError)]
pub enum FactoryError {
    #[error("unknown vehicle type: {0}")]
    UnknownKind(String),

    #[error("unknown furniture style: {0}")]
    UnknownStyle(String),
}

///
/// VehicleKind
///

#[derive(Clone, Copy, Debug, Display, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[remain::sorted]
pub enum VehicleKind {
    #[display("car")]
    Car,
    #[display("motorcycle")]
    Motorcycle,
    #[display("truck")]
    Truck,
}

impl FromStr for VehicleKind {
    type Err = FactoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "car" => Ok(Self::Car),
            "motorcycle" => Ok(Self::Motorcycle),
            "truck" => Ok(Self::Truck),
            _ => Err(FactoryError::UnknownKind(s.to_string())),
        }
    }
}

///
/// VehicleSpec
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VehicleSpec {
    pub brand: String,
    pub model: String,
    pub year: u32,
}

impl VehicleSpec {
    #[must_use]
    pub fn new(brand: impl Into<String>, model: impl Into<String>, year: u32) -> Self {
        Self {
            brand: brand.into(),
            model: model.into(),
            year,
        }
    }
}

///
/// Vehicle
///

pub trait Vehicle {
    fn kind(&self) -> VehicleKind;
    fn spec(&self) -> &VehicleSpec;
    fn info(&self) -> String;

    fn start_engine(&self) {
        let spec = self.spec();
        log!(
            Topic::FactoryMethod,
            Info,
            "{} {} {} engine started",
            icon(self.kind()),
            spec.brand,
            spec.model
        );
    }

    fn stop_engine(&self) {
        let spec = self.spec();
        log!(
            Topic::FactoryMethod,
            Info,
            "{} {} {} engine stopped",
            icon(self.kind()),
            spec.brand,
            spec.model
        );
    }
}

const fn icon(kind: VehicleKind) -> &'static str {
    match kind {
        VehicleKind::Car => "🚗",
        VehicleKind::Motorcycle => "🏍️",
        VehicleKind::Truck => "🚛",
    }
}

///
/// Car
///

#[derive(Debug)]
pub struct Car {
    spec: VehicleSpec,
}

impl Vehicle for Car {
    fn kind(&self) -> VehicleKind {
        VehicleKind::Car
    }

    fn spec(&self) -> &VehicleSpec {
        &self.spec
    }

    fn info(&self) -> String {
        let VehicleSpec { brand, model, year } = &self.spec;

        format!("Car: {brand} {model} ({year})")
    }
}

///
/// Motorcycle
///

#[derive(Debug)]
pub struct Motorcycle {
    spec: VehicleSpec,
}

impl Vehicle for Motorcycle {
    fn kind(&self) -> VehicleKind {
        VehicleKind::Motorcycle
    }

    fn spec(&self) -> &VehicleSpec {
        &self.spec
    }

    fn info(&self) -> String {
        let VehicleSpec { brand, model, year } = &self.spec;

        format!("Motorcycle: {brand} {model} ({year})")
    }
}

///
/// Truck
///

#[derive(Debug)]
pub struct Truck {
    spec: VehicleSpec,
    capacity_tons: u32,
}

impl Truck {
    pub const DEFAULT_CAPACITY_TONS: u32 = 10;

    #[must_use]
    pub const fn capacity_tons(&self) -> u32 {
        self.capacity_tons
    }
}

impl Vehicle for Truck {
    fn kind(&self) -> VehicleKind {
        VehicleKind::Truck
    }

    fn spec(&self) -> &VehicleSpec {
        &self.spec
    }

    fn info(&self) -> String {
        let VehicleSpec { brand, model, year } = &self.spec;

        format!(
            "Truck: {brand} {model} ({year}) - Capacity: {} tons",
            self.capacity_tons
        )
    }
}

///
/// VehicleFactory
///

pub trait VehicleFactory {
    fn name(&self) -> &'static str;
    fn create(&self, spec: VehicleSpec) -> Box<dyn Vehicle>;
}

pub struct CarFactory;

impl VehicleFactory for CarFactory {
    fn name(&self) -> &'static str {
        "Car Factory"
    }

    fn create(&self, spec: VehicleSpec) -> Box<dyn Vehicle> {
        Box::new(Car { spec })
    }
}

pub struct MotorcycleFactory;

impl VehicleFactory for MotorcycleFactory {
    fn name(&self) -> &'static str {
        "Motorcycle Factory"
    }

    fn create(&self, spec: VehicleSpec) -> Box<dyn Vehicle> {
        Box::new(Motorcycle { spec })
    }
}

pub struct TruckFactory;

impl VehicleFactory for TruckFactory {
    fn name(&self) -> &'static str {
        "Truck Factory"
    }

    // capacity is not part of VehicleSpec
    fn create(&self, spec: VehicleSpec) -> Box<dyn Vehicle> {
        Box::new(Truck {
            spec,
            capacity_tons: Truck::DEFAULT_CAPACITY_TONS,
        })
    }
}

///
/// VehicleManufacturer
///
/// Client that picks the factory for a requested kind and never names a
/// concrete vehicle type itself.
///

pub struct VehicleManufacturer {
    factories: BTreeMap<VehicleKind, Box<dyn VehicleFactory>>,
}

impl Default for VehicleManufacturer {
    fn default() -> Self {
        Self::new()
    }
}

impl VehicleManufacturer {
    #[must_use]
    pub fn new() -> Self {
        let mut factories: BTreeMap<VehicleKind, Box<dyn VehicleFactory>> = BTreeMap::new();
        factories.insert(VehicleKind::Car, Box::new(CarFactory));
        factories.insert(VehicleKind::Motorcycle, Box::new(MotorcycleFactory));
        factories.insert(VehicleKind::Truck, Box::new(TruckFactory));

        Self { factories }
    }

    /// Registered kinds paired with their factory names, in kind order.
    #[must_use]
    pub fn available(&self) -> Vec<(VehicleKind, &'static str)> {
        self.factories
            .iter()
            .map(|(kind, factory)| (*kind, factory.name()))
            .collect()
    }

    pub fn manufacture(
        &self,
        kind: &str,
        spec: VehicleSpec,
    ) -> Result<Box<dyn Vehicle>, FactoryError> {
        let kind = kind.parse::<VehicleKind>().inspect_err(|err| {
            log!(Topic::FactoryMethod, Warn, "❌ {err}");
        })?;
        let factory = self
            .factories
            .get(&kind)
            .ok_or_else(|| FactoryError::UnknownKind(kind.to_string()))?;

        log!(
            Topic::FactoryMethod,
            Info,
            "🏭 Using {} to manufacture {} {}",
            factory.name(),
            spec.brand,
            spec.model
        );

        Ok(factory.create(spec))
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_parse_case_insensitively() {
        assert_eq!("Car".parse::<VehicleKind>(), Ok(VehicleKind::Car));
        assert_eq!(" truck ".parse::<VehicleKind>(), Ok(VehicleKind::Truck));
        assert_eq!(
            "boat".parse::<VehicleKind>(),
            Err(FactoryError::UnknownKind("boat".into()))
        );
    }

    #[test]
    fn manufacturer_dispatches_by_kind() {
        let m = VehicleManufacturer::new();

        let car = m
            .manufacture("car", VehicleSpec::new("Volkswagen", "Golf", 2024))
            .unwrap();
        assert_eq!(car.kind(), VehicleKind::Car);
        assert_eq!(car.info(), "Car: Volkswagen Golf (2024)");

        let truck = m
            .manufacture("truck", VehicleSpec::new("Volvo", "FH16", 2024))
            .unwrap();
        assert_eq!(truck.info(), "Truck: Volvo FH16 (2024) - Capacity: 10 tons");
    }

    #[test]
    fn unknown_kind_is_an_error() {
        let m = VehicleManufacturer::new();
        let err = m
            .manufacture("spaceship", VehicleSpec::new("X", "Y", 1))
            .err()
            .unwrap();

        assert_eq!(err, FactoryError::UnknownKind("spaceship".into()));
    }

    #[test]
    fn available_lists_all_factories_in_order() {
        let names: Vec<_> = VehicleManufacturer::new()
            .available()
            .into_iter()
            .map(|(_, name)| name)
            .collect();

        assert_eq!(
            names,
            vec!["Car Factory", "Motorcycle Factory", "Truck Factory"]
        );
    }
}
