use crate::{ThisError, log, log::Topic};
use std::fmt::{self, Display};

///
/// BuildError
///

#[derive(Debug, Eq, PartialEq, ThisError)]
pub enum BuildError {
    #[error("computer has no cpu")]
    MissingCpu,

    #[error("computer has no ram")]
    ZeroRam,
}

///
/// Computer
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Computer {
    pub cpu: String,
    pub ram_gb: u32,
    pub storage_gb: u32,
}

impl Display for Computer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CPU={}, RAM={}GB, Storage={}GB",
            self.cpu, self.ram_gb, self.storage_gb
        )
    }
}

///
/// ComputerBuilder
///

pub trait ComputerBuilder {
    fn set_cpu(&mut self, cpu: &str);
    fn set_ram(&mut self, ram_gb: u32);
    fn set_storage(&mut self, storage_gb: u32);
    fn build(&self) -> Result<Computer, BuildError>;
}

///
/// StandardComputerBuilder
///

#[derive(Debug, Default)]
pub struct StandardComputerBuilder {
    cpu: Option<String>,
    ram_gb: u32,
    storage_gb: u32,
}

impl StandardComputerBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl ComputerBuilder for StandardComputerBuilder {
    fn set_cpu(&mut self, cpu: &str) {
        self.cpu = Some(cpu.to_string());
    }

    fn set_ram(&mut self, ram_gb: u32) {
        self.ram_gb = ram_gb;
    }

    fn set_storage(&mut self, storage_gb: u32) {
        self.storage_gb = storage_gb;
    }

    fn build(&self) -> Result<Computer, BuildError> {
        let cpu = self
            .cpu
            .clone()
            .filter(|cpu| !cpu.trim().is_empty())
            .ok_or(BuildError::MissingCpu)?;

        if self.ram_gb == 0 {
            return Err(BuildError::ZeroRam);
        }

        Ok(Computer {
            cpu,
            ram_gb: self.ram_gb,
            storage_gb: self.storage_gb,
        })
    }
}

///
/// Director
/// Fixed construction recipes driven through any builder.
///

pub struct Director;

impl Director {
    pub fn construct_gaming_pc(builder: &mut dyn ComputerBuilder) -> Result<Computer, BuildError> {
        Self::construct(builder, "Intel i9", 32, 2000, "gaming")
    }

    pub fn construct_office_pc(builder: &mut dyn ComputerBuilder) -> Result<Computer, BuildError> {
        Self::construct(builder, "Intel i5", 16, 512, "office")
    }

    fn construct(
        builder: &mut dyn ComputerBuilder,
        cpu: &str,
        ram_gb: u32,
        storage_gb: u32,
        recipe: &str,
    ) -> Result<Computer, BuildError> {
        builder.set_cpu(cpu);
        builder.set_ram(ram_gb);
        builder.set_storage(storage_gb);

        let computer = builder.build()?;
        log!(Topic::Builder, Info, "🛠️ Built {recipe} PC: {computer}");

        Ok(computer)
    }
}

///
/// TESTS
///
