//! Interface segregation: office devices.
//!
//! Instead of one `Machine` trait with print, scan and fax (which a plain
//! printer could only "implement" by failing), each capability is its own
//! trait. A device implements the roles it really has, and callers ask for
//! exactly the roles they use.

use tracing::debug;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    pub title: String,
}

impl Document {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}

/// What a device did with a document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceOutput {
    pub device: &'static str,
    pub action: Action,
    pub document: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Printed,
    Scanned,
    Faxed,
}

impl DeviceOutput {
    fn new(device: &'static str, action: Action, d: &Document) -> Self {
        debug!("{} {:?} \"{}\"", device, action, d.title);
        Self {
            device,
            action,
            document: d.title.clone(),
        }
    }
}

// =============================================================================
// Role traits
// =============================================================================

pub trait Printer {
    fn print(&self, d: &Document) -> DeviceOutput;
}

pub trait Scanner {
    fn scan(&self, d: &Document) -> DeviceOutput;
}

pub trait Fax {
    fn fax(&self, d: &Document) -> DeviceOutput;
}

/// Every role at once. Anything implementing all three gets it for free.
pub trait MultifunctionDevice: Printer + Scanner + Fax {}

impl<T: Printer + Scanner + Fax> MultifunctionDevice for T {}

// =============================================================================
// Devices
// =============================================================================

#[derive(Debug, Clone, Copy, Default)]
pub struct MultifunctionPrinter;

impl Printer for MultifunctionPrinter {
    fn print(&self, d: &Document) -> DeviceOutput {
        DeviceOutput::new("MultifunctionPrinter", Action::Printed, d)
    }
}

impl Scanner for MultifunctionPrinter {
    fn scan(&self, d: &Document) -> DeviceOutput {
        DeviceOutput::new("MultifunctionPrinter", Action::Scanned, d)
    }
}

impl Fax for MultifunctionPrinter {
    fn fax(&self, d: &Document) -> DeviceOutput {
        DeviceOutput::new("MultifunctionPrinter", Action::Faxed, d)
    }
}

/// Prints and nothing else; no stub scan or fax methods needed.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClassicPrinter;

impl Printer for ClassicPrinter {
    fn print(&self, d: &Document) -> DeviceOutput {
        DeviceOutput::new("ClassicPrinter", Action::Printed, d)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Photocopier;

impl Printer for Photocopier {
    fn print(&self, d: &Document) -> DeviceOutput {
        DeviceOutput::new("Photocopier", Action::Printed, d)
    }
}

impl Scanner for Photocopier {
    fn scan(&self, d: &Document) -> DeviceOutput {
        DeviceOutput::new("Photocopier", Action::Scanned, d)
    }
}

/// Built from existing single-role devices.
///
/// Printing and scanning are delegated to the wrapped devices (the basis of
/// the decorator pattern); faxing is handled by the machine itself.
#[derive(Debug, Clone)]
pub struct MultifunctionMachine<P, S> {
    printer: P,
    scanner: S,
}

impl<P: Printer, S: Scanner> MultifunctionMachine<P, S> {
    pub fn new(printer: P, scanner: S) -> Self {
        Self { printer, scanner }
    }
}

impl<P: Printer, S> Printer for MultifunctionMachine<P, S> {
    fn print(&self, d: &Document) -> DeviceOutput {
        self.printer.print(d)
    }
}

impl<P, S: Scanner> Scanner for MultifunctionMachine<P, S> {
    fn scan(&self, d: &Document) -> DeviceOutput {
        self.scanner.scan(d)
    }
}

impl<P, S> Fax for MultifunctionMachine<P, S> {
    fn fax(&self, d: &Document) -> DeviceOutput {
        DeviceOutput::new("MultifunctionMachine", Action::Faxed, d)
    }
}

/// Print every document on any printer; needs nothing but the `Printer` role
pub fn print_all<P: Printer + ?Sized>(printer: &P, documents: &[Document]) -> Vec<DeviceOutput> {
    documents.iter().map(|d| printer.print(d)).collect()
}
