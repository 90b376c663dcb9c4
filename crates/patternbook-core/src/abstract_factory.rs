use crate::{factory_method::FactoryError, log, log::Topic};
use derive_more::Display;
use std::{collections::BTreeMap, str::FromStr};

///
/// FurnitureStyle
///

#[derive(Clone, Copy, Debug, Display, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[remain::sorted]
pub enum FurnitureStyle {
    #[display("modern")]
    Modern,
    #[display("victorian")]
    Victorian,
}

impl FromStr for FurnitureStyle {
    type Err = FactoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "modern" => Ok(Self::Modern),
            "victorian" => Ok(Self::Victorian),
            _ => Err(FactoryError::UnknownStyle(s.to_string())),
        }
    }
}

///
/// Products
///

pub trait Chair {
    fn style(&self) -> FurnitureStyle;
    fn sit_on(&self);
    fn info(&self) -> String;
}

pub trait Table {
    fn style(&self) -> FurnitureStyle;
    fn put_on(&self);
    fn info(&self) -> String;
}

pub trait Sofa {
    fn style(&self) -> FurnitureStyle;
    fn lie_on(&self);
    fn info(&self) -> String;
}

const fn carving(carved: bool) -> &'static str {
    if carved { "with carvings" } else { "without carvings" }
}

///
/// Modern family
///

#[derive(Debug)]
pub struct ModernChair {
    material: String,
    color: String,
}

impl Chair for ModernChair {
    fn style(&self) -> FurnitureStyle {
        FurnitureStyle::Modern
    }

    fn sit_on(&self) {
        log!(
            Topic::AbstractFactory,
            Info,
            "🪑 Sitting on modern {} {} chair",
            self.color,
            self.material
        );
    }

    fn info(&self) -> String {
        format!(
            "Modern Chair - Material: {}, Color: {}",
            self.material, self.color
        )
    }
}

#[derive(Debug)]
pub struct ModernTable {
    material: String,
    color: String,
    size: String,
}

impl Table for ModernTable {
    fn style(&self) -> FurnitureStyle {
        FurnitureStyle::Modern
    }

    fn put_on(&self) {
        log!(
            Topic::AbstractFactory,
            Info,
            "🪑 Putting items on modern {} {} {} table",
            self.color,
            self.material,
            self.size
        );
    }

    fn info(&self) -> String {
        format!(
            "Modern Table - Material: {}, Color: {}, Size: {}",
            self.material, self.color, self.size
        )
    }
}

#[derive(Debug)]
pub struct ModernSofa {
    material: String,
    color: String,
    seats: u32,
}

impl Sofa for ModernSofa {
    fn style(&self) -> FurnitureStyle {
        FurnitureStyle::Modern
    }

    fn lie_on(&self) {
        log!(
            Topic::AbstractFactory,
            Info,
            "🛋️ Lying on modern {} {} sofa with {} seats",
            self.color,
            self.material,
            self.seats
        );
    }

    fn info(&self) -> String {
        format!(
            "Modern Sofa - Material: {}, Color: {}, Seats: {}",
            self.material, self.color, self.seats
        )
    }
}

///
/// Victorian family
/// Every victorian piece the factory produces is carved.
///

#[derive(Debug)]
pub struct VictorianChair {
    material: String,
    color: String,
    carved: bool,
}

impl Chair for VictorianChair {
    fn style(&self) -> FurnitureStyle {
        FurnitureStyle::Victorian
    }

    fn sit_on(&self) {
        log!(
            Topic::AbstractFactory,
            Info,
            "🪑 Sitting on victorian {} {} chair {}",
            self.color,
            self.material,
            carving(self.carved)
        );
    }

    fn info(&self) -> String {
        format!(
            "Victorian Chair - Material: {}, Color: {}, {}",
            self.material,
            self.color,
            carving(self.carved)
        )
    }
}

#[derive(Debug)]
pub struct VictorianTable {
    material: String,
    color: String,
    size: String,
    carved: bool,
}

impl Table for VictorianTable {
    fn style(&self) -> FurnitureStyle {
        FurnitureStyle::Victorian
    }

    fn put_on(&self) {
        log!(
            Topic::AbstractFactory,
            Info,
            "🪑 Putting items on victorian {} {} {} table {}",
            self.color,
            self.material,
            self.size,
            carving(self.carved)
        );
    }

    fn info(&self) -> String {
        format!(
            "Victorian Table - Material: {}, Color: {}, Size: {}, {}",
            self.material,
            self.color,
            self.size,
            carving(self.carved)
        )
    }
}

#[derive(Debug)]
pub struct VictorianSofa {
    material: String,
    color: String,
    seats: u32,
    carved: bool,
}

impl Sofa for VictorianSofa {
    fn style(&self) -> FurnitureStyle {
        FurnitureStyle::Victorian
    }

    fn lie_on(&self) {
        log!(
            Topic::AbstractFactory,
            Info,
            "🛋️ Lying on victorian {} {} sofa with {} seats {}",
            self.color,
            self.material,
            self.seats,
            carving(self.carved)
        );
    }

    fn info(&self) -> String {
        format!(
            "Victorian Sofa - Material: {}, Color: {}, Seats: {}, {}",
            self.material,
            self.color,
            self.seats,
            carving(self.carved)
        )
    }
}

///
/// FurnitureFactory
///

pub trait FurnitureFactory {
    fn name(&self) -> &'static str;
    fn create_chair(&self, material: &str, color: &str) -> Box<dyn Chair>;
    fn create_table(&self, material: &str, color: &str, size: &str) -> Box<dyn Table>;
    fn create_sofa(&self, material: &str, color: &str, seats: u32) -> Box<dyn Sofa>;
}

pub struct ModernFurnitureFactory;

impl FurnitureFactory for ModernFurnitureFactory {
    fn name(&self) -> &'static str {
        "Modern Furniture Factory"
    }

    fn create_chair(&self, material: &str, color: &str) -> Box<dyn Chair> {
        Box::new(ModernChair {
            material: material.to_string(),
            color: color.to_string(),
        })
    }

    fn create_table(&self, material: &str, color: &str, size: &str) -> Box<dyn Table> {
        Box::new(ModernTable {
            material: material.to_string(),
            color: color.to_string(),
            size: size.to_string(),
        })
    }

    fn create_sofa(&self, material: &str, color: &str, seats: u32) -> Box<dyn Sofa> {
        Box::new(ModernSofa {
            material: material.to_string(),
            color: color.to_string(),
            seats,
        })
    }
}

pub struct VictorianFurnitureFactory;

impl FurnitureFactory for VictorianFurnitureFactory {
    fn name(&self) -> &'static str {
        "Victorian Furniture Factory"
    }

    fn create_chair(&self, material: &str, color: &str) -> Box<dyn Chair> {
        Box::new(VictorianChair {
            material: material.to_string(),
            color: color.to_string(),
            carved: true,
        })
    }

    fn create_table(&self, material: &str, color: &str, size: &str) -> Box<dyn Table> {
        Box::new(VictorianTable {
            material: material.to_string(),
            color: color.to_string(),
            size: size.to_string(),
            carved: true,
        })
    }

    fn create_sofa(&self, material: &str, color: &str, seats: u32) -> Box<dyn Sofa> {
        Box::new(VictorianSofa {
            material: material.to_string(),
            color: color.to_string(),
            seats,
            carved: true,
        })
    }
}

///
/// FurnitureSet
///

pub struct FurnitureSet {
    pub style: FurnitureStyle,
    pub chair: Box<dyn Chair>,
    pub table: Box<dyn Table>,
    pub sofa: Box<dyn Sofa>,
}

impl FurnitureSet {
    /// True when every piece came from the same family.
    #[must_use]
    pub fn is_matching(&self) -> bool {
        self.chair.style() == self.style
            && self.table.style() == self.style
            && self.sofa.style() == self.style
    }
}

///
/// FurnitureManufacturer
///

pub struct FurnitureManufacturer {
    factories: BTreeMap<FurnitureStyle, Box<dyn FurnitureFactory>>,
}

impl Default for FurnitureManufacturer {
    fn default() -> Self {
        Self::new()
    }
}

impl FurnitureManufacturer {
    pub const TABLE_SIZE: &'static str = "Medium";
    pub const SOFA_SEATS: u32 = 3;

    #[must_use]
    pub fn new() -> Self {
        let mut factories: BTreeMap<FurnitureStyle, Box<dyn FurnitureFactory>> = BTreeMap::new();
        factories.insert(FurnitureStyle::Modern, Box::new(ModernFurnitureFactory));
        factories.insert(FurnitureStyle::Victorian, Box::new(VictorianFurnitureFactory));

        Self { factories }
    }

    #[must_use]
    pub fn available(&self) -> Vec<(FurnitureStyle, &'static str)> {
        self.factories
            .iter()
            .map(|(style, factory)| (*style, factory.name()))
            .collect()
    }

    pub fn furniture_set(
        &self,
        style: &str,
        material: &str,
        color: &str,
    ) -> Result<FurnitureSet, FactoryError> {
        let style = style.parse::<FurnitureStyle>().inspect_err(|err| {
            log!(Topic::AbstractFactory, Warn, "❌ {err}");
        })?;
        let factory = self
            .factories
            .get(&style)
            .ok_or_else(|| FactoryError::UnknownStyle(style.to_string()))?;

        log!(
            Topic::AbstractFactory,
            Info,
            "🏭 Using {} to create furniture set",
            factory.name()
        );

        Ok(FurnitureSet {
            style,
            chair: factory.create_chair(material, color),
            table: factory.create_table(material, color, Self::TABLE_SIZE),
            sofa: factory.create_sofa(material, color, Self::SOFA_SEATS),
        })
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sets_come_from_one_family() {
        let m = FurnitureManufacturer::new();

        for style in ["modern", "victorian"] {
            let set = m.furniture_set(style, "Wood", "Brown").unwrap();
            assert!(set.is_matching());
        }
    }

    #[test]
    fn victorian_pieces_are_carved() {
        let set = FurnitureManufacturer::new()
            .furniture_set("Victorian", "Wood", "Brown")
            .unwrap();

        assert_eq!(
            set.chair.info(),
            "Victorian Chair - Material: Wood, Color: Brown, with carvings"
        );
        assert!(set.sofa.info().contains("Seats: 3"));
        assert!(set.table.info().contains("Size: Medium"));
    }

    #[test]
    fn modern_pieces_have_no_carving_note() {
        let set = FurnitureManufacturer::new()
            .furniture_set("modern", "Leather", "Black")
            .unwrap();

        assert_eq!(
            set.chair.info(),
            "Modern Chair - Material: Leather, Color: Black"
        );
        assert!(!set.table.info().contains("carvings"));
    }

    #[test]
    fn unknown_style_is_an_error() {
        let err = FurnitureManufacturer::new()
            .furniture_set("baroque", "Gold", "Gold")
            .err()
            .unwrap();

        assert_eq!(err, FactoryError::UnknownStyle("baroque".into()));
    }
}
