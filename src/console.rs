//! Terminal front end: menu loop, input retry loops and rendering.
//!
//! Everything the operator types is checked here before it reaches the
//! [`Catalog`]; the catalog still re-checks and its errors are shown as-is.
use super::catalog::Catalog;
use super::config::{ConsoleConfig, IdMode};
use super::error::{CatalogError, ConsoleError};
use super::product::Product;
use std::io::{self, BufRead, Write};
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddProduct,
    UpdatePrice,
    StockIn,
    StockOut,
    ShowProduct,
    ShowAll,
    Exit,
}

impl MenuChoice {
    pub fn from_number(n: i64) -> Option<Self> {
        let choice = match n {
            1 => MenuChoice::AddProduct,
            2 => MenuChoice::UpdatePrice,
            3 => MenuChoice::StockIn,
            4 => MenuChoice::StockOut,
            5 => MenuChoice::ShowProduct,
            6 => MenuChoice::ShowAll,
            7 => MenuChoice::Exit,
            _ => return None,
        };
        Some(choice)
    }
}

const MENU: &str = "Inventory Management\n\
1. Add New Product\n\
2. Update Product Price\n\
3. Update Product Stock (Stock In)\n\
4. Update Product Stock (Stock Out)\n\
5. Display Product Details\n\
6. Display All Products & Histories\n\
7. Exit\n";

pub struct Console<R, W> {
    catalog: Catalog,
    config: ConsoleConfig,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(catalog: Catalog, config: ConsoleConfig, input: R, output: W) -> Self {
        Self {
            catalog,
            config,
            input,
            output,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn into_catalog(self) -> Catalog {
        self.catalog
    }

    /// Run the menu until the operator picks Exit or input runs out
    pub fn run(&mut self) -> anyhow::Result<()> {
        writeln!(self.output, "Welcome to the Inventory Management System\n")?;

        match self.menu_loop() {
            Ok(()) => {}
            Err(ConsoleError::InputClosed) => {
                debug!("input closed, leaving menu");
            }
            Err(err) => return Err(err.into()),
        }

        writeln!(self.output, "Exiting program. Goodbye!")?;
        self.output.flush()?;
        Ok(())
    }

    fn menu_loop(&mut self) -> Result<(), ConsoleError> {
        loop {
            write!(self.output, "{MENU}")?;
            let number = self.read_menu_number()?;

            let Some(choice) = MenuChoice::from_number(number) else {
                writeln!(self.output, "Invalid selection. Please try again.\n")?;
                continue;
            };
            debug!(?choice, "menu choice");

            match choice {
                MenuChoice::AddProduct => self.add_product()?,
                MenuChoice::UpdatePrice => self.update_price()?,
                MenuChoice::StockIn => self.stock_in()?,
                MenuChoice::StockOut => self.stock_out()?,
                MenuChoice::ShowProduct => self.show_product()?,
                MenuChoice::ShowAll => self.show_all()?,
                MenuChoice::Exit => return Ok(()),
            }
        }
    }

    fn add_product(&mut self) -> Result<(), ConsoleError> {
        writeln!(self.output, "\n-- Add New Product --")?;

        let id = match self.config.id_mode {
            IdMode::Manual => self.prompt_text("Enter Product ID: ")?,
            IdMode::Sequential => {
                let id = self.catalog.next_sequential_id();
                writeln!(self.output, "Product ID: {id}")?;
                id.to_string()
            }
        };
        // fail before asking for the rest of the fields
        if self.catalog.contains(&id) {
            return report(&mut self.output, &CatalogError::DuplicateId(id.into()));
        }

        let name = self.prompt_text("Enter Product Name: ")?;
        let price = self.prompt_price("Enter Selling Price: ")?;
        let stock = self.prompt_quantity("Enter Initial Stock Quantity: ")?;

        match self.catalog.create_product(id, name, price, stock) {
            Ok(product) => {
                info!(product_id = %product.id(), price = product.price(), stock, "product added");
                writeln!(self.output, "Product added successfully.\n")?;
                Ok(())
            }
            Err(err) => report(&mut self.output, &err),
        }
    }

    fn update_price(&mut self) -> Result<(), ConsoleError> {
        writeln!(self.output, "\n-- Update Product Price --")?;
        let Some(id) = self.prompt_existing_id()? else {
            return Ok(());
        };
        let price = self.prompt_price("Enter New Price: ")?;

        match self.catalog.set_price(&id, price) {
            Ok(product) => {
                info!(product_id = %product.id(), price = product.price(), "price updated");
                writeln!(self.output, "Price updated.\n")?;
                Ok(())
            }
            Err(err) => report(&mut self.output, &err),
        }
    }

    fn stock_in(&mut self) -> Result<(), ConsoleError> {
        writeln!(self.output, "\n-- Stock In (Add Quantity) --")?;
        let Some(id) = self.prompt_existing_id()? else {
            return Ok(());
        };
        let quantity = self.prompt_quantity("Enter Quantity to Add: ")?;

        match self.catalog.stock_in(&id, quantity) {
            Ok(product) => {
                info!(product_id = %product.id(), quantity, stock = product.stock(), "stock in");
                writeln!(self.output, "Stock increased.\n")?;
                Ok(())
            }
            Err(err) => report(&mut self.output, &err),
        }
    }

    fn stock_out(&mut self) -> Result<(), ConsoleError> {
        writeln!(self.output, "\n-- Stock Out (Remove Quantity) --")?;
        let Some(id) = self.prompt_existing_id()? else {
            return Ok(());
        };
        let quantity = self.prompt_quantity("Enter Quantity to Remove: ")?;

        match self.catalog.stock_out(&id, quantity) {
            Ok(product) => {
                info!(product_id = %product.id(), quantity, stock = product.stock(), "stock out");
                writeln!(self.output, "Stock decreased.\n")?;
                Ok(())
            }
            Err(err) => report(&mut self.output, &err),
        }
    }

    fn show_product(&mut self) -> Result<(), ConsoleError> {
        writeln!(self.output, "\n-- Display Product Details --")?;
        let id = self.prompt_text("Enter Product ID: ")?;

        match self.catalog.find(&id) {
            Ok(product) => render_product(&mut self.output, product)?,
            Err(err) => report(&mut self.output, &err)?,
        }
        Ok(())
    }

    fn show_all(&mut self) -> Result<(), ConsoleError> {
        writeln!(self.output, "\n-- All Products & Histories --")?;
        if self.catalog.is_empty() {
            writeln!(self.output, "No products in catalog.\n")?;
            return Ok(());
        }
        for product in self.catalog.list() {
            render_product(&mut self.output, product)?;
        }
        Ok(())
    }

    /// Ask for an id and report right away when nothing has it
    fn prompt_existing_id(&mut self) -> Result<Option<String>, ConsoleError> {
        let id = self.prompt_text("Enter Product ID: ")?;
        if let Err(err) = self.catalog.find(&id) {
            report(&mut self.output, &err)?;
            return Ok(None);
        }
        Ok(Some(id))
    }

    fn prompt_text(&mut self, prompt: &str) -> Result<String, ConsoleError> {
        loop {
            self.show_prompt(prompt)?;
            let line = self.read_line()?;
            if !line.is_empty() {
                return Ok(line);
            }
        }
    }

    fn prompt_price(&mut self, prompt: &str) -> Result<f64, ConsoleError> {
        self.show_prompt(prompt)?;
        loop {
            match self.read_line()?.parse::<f64>() {
                Ok(value) if value.is_finite() && value >= 0.0 => return Ok(value),
                _ => self.show_prompt("Please enter a non-negative number: ")?,
            }
        }
    }

    fn prompt_quantity(&mut self, prompt: &str) -> Result<u32, ConsoleError> {
        self.show_prompt(prompt)?;
        loop {
            match self.read_line()?.parse::<u32>() {
                Ok(value) => return Ok(value),
                Err(_) => self.show_prompt("Please enter a non-negative integer: ")?,
            }
        }
    }

    fn read_menu_number(&mut self) -> Result<i64, ConsoleError> {
        self.show_prompt("Select an option (1-7): ")?;
        loop {
            let line = self.read_line()?;
            if line.is_empty() {
                continue;
            }
            match line.parse::<i64>() {
                Ok(value) => return Ok(value),
                Err(_) => self.show_prompt("Please enter a valid number: ")?,
            }
        }
    }

    fn show_prompt(&mut self, prompt: &str) -> io::Result<()> {
        write!(self.output, "{prompt}")?;
        self.output.flush()
    }

    /// Next trimmed line, or `InputClosed` at end of input
    fn read_line(&mut self) -> Result<String, ConsoleError> {
        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Err(ConsoleError::InputClosed);
        }
        Ok(buf.trim().to_string())
    }
}

fn report<W: Write>(out: &mut W, err: &CatalogError) -> Result<(), ConsoleError> {
    info!(error = %err, "operation rejected");
    writeln!(out, "Error: {err}\n")?;
    Ok(())
}

/// Write a product, its timelines and its full history
pub fn render_product<W: Write>(out: &mut W, product: &Product) -> io::Result<()> {
    writeln!(out, "Product ID   : {}", product.id())?;
    writeln!(out, "Name         : {}", product.name())?;
    writeln!(out, "Current Price: {:.2}", product.price())?;
    writeln!(out, "Current Stock: {}", product.stock())?;

    let prices: Vec<String> = product
        .price_timeline()
        .iter()
        .map(|price| format!("{price:.2}"))
        .collect();
    let stocks: Vec<String> = product
        .stock_timeline()
        .iter()
        .map(u32::to_string)
        .collect();
    writeln!(out, "Price History: {}", prices.join(" "))?;
    writeln!(out, "Stock History: {}", stocks.join(" "))?;

    writeln!(out, "History:")?;
    for entry in product.history() {
        writeln!(out, "  - {entry}")?;
    }
    writeln!(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn session(script: &str, config: ConsoleConfig) -> (Catalog, String) {
        let mut output = Vec::new();
        let mut console = Console::new(
            Catalog::new(),
            config,
            Cursor::new(script.as_bytes().to_vec()),
            &mut output,
        );
        console.run().unwrap();
        let catalog = console.into_catalog();
        (catalog, String::from_utf8(output).unwrap())
    }

    #[test]
    fn menu_numbers() {
        assert_eq!(MenuChoice::from_number(1), Some(MenuChoice::AddProduct));
        assert_eq!(MenuChoice::from_number(7), Some(MenuChoice::Exit));
        assert_eq!(MenuChoice::from_number(0), None);
        assert_eq!(MenuChoice::from_number(8), None);
    }

    #[test]
    fn exit_immediately() {
        let (catalog, out) = session("7\n", ConsoleConfig::default());
        assert!(catalog.is_empty());
        assert!(out.ends_with("Exiting program. Goodbye!\n"));
    }

    #[test]
    fn closed_input_ends_session() {
        let (_, out) = session("1\n001\n", ConsoleConfig::default());
        assert!(out.ends_with("Exiting program. Goodbye!\n"));
    }

    #[test]
    fn bad_numbers_are_reprompted() {
        let script = "x\n9\n1\n001\n\nPen\n-3\nabc\n2.5\n-1\n4\n7\n";
        let (catalog, out) = session(script, ConsoleConfig::default());

        assert!(out.contains("Please enter a valid number: "));
        assert!(out.contains("Invalid selection. Please try again."));
        assert!(out.contains("Please enter a non-negative number: "));
        assert!(out.contains("Please enter a non-negative integer: "));

        let pen = catalog.find("001").unwrap();
        assert_eq!(pen.name(), "Pen");
        assert_eq!(pen.price(), 2.5);
        assert_eq!(pen.stock(), 4);
    }

    #[test]
    fn blank_lines_at_menu_are_skipped() {
        let (_, out) = session("\n\n7\n", ConsoleConfig::default());
        assert!(!out.contains("Please enter a valid number: "));
        assert!(out.ends_with("Exiting program. Goodbye!\n"));
    }

    #[test]
    fn negative_zero_price_renders_as_zero() {
        let script = "1\n001\nPen\n-0\n1\n5\n001\n7\n";
        let (catalog, out) = session(script, ConsoleConfig::default());

        assert!(!catalog.find("001").unwrap().price().is_sign_negative());
        assert!(out.contains("Current Price: 0.00"));
        assert!(out.contains("Price History: 0.00"));
        assert!(out.contains("Added - Name: Pen, Price: 0.00, Stock: 1"));
        assert!(!out.contains("-0.00"));
    }

    #[test]
    fn sequential_ids_are_announced() {
        let config = ConsoleConfig {
            id_mode: IdMode::Sequential,
        };
        let (catalog, out) = session("1\nPen\n1\n1\n1\nInk\n2\n0\n7\n", config);

        assert!(out.contains("Product ID: 001"));
        assert!(out.contains("Product ID: 002"));
        assert_eq!(catalog.find("002").unwrap().name(), "Ink");
    }

    #[test]
    fn render_lists_timelines() {
        let mut catalog = Catalog::new();
        catalog.create_product("001", "Pen", 10.0, 5).unwrap();
        catalog.set_price("001", 12.0).unwrap();
        catalog.stock_in("001", 3).unwrap();

        let mut out = Vec::new();
        render_product(&mut out, catalog.find("001").unwrap()).unwrap();
        let out = String::from_utf8(out).unwrap();

        assert!(out.contains("Current Price: 12.00"));
        assert!(out.contains("Price History: 10.00 12.00"));
        assert!(out.contains("Stock History: 5 8"));
        assert!(out.contains("Price updated from 10.00 to 12.00"));
    }
}
