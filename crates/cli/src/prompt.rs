//! Interactive prompts
//!
//! Reads product and order fields from any line-based input. Invalid values are
//! re-prompted; end of input abandons the current prompt with `None`.

use std::{
    fmt,
    io::{self, BufRead, Write},
    str::FromStr,
};

use aisle::{
    orders::Order,
    prices::Price,
    products::{Product, ProductId, ProductKind},
};

/// Prompts for values on `output` and reads answers from `input`.
#[derive(Debug)]
pub struct Prompter<R, W> {
    input: R,
    output: W,
    buffer: Vec<u8>,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    /// Create a new prompter.
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            buffer: Vec::new(),
        }
    }

    /// The output used for prompts.
    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    /// Consume the prompter and return its output.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Write `prompt` and read one trimmed line. Returns `None` at end of input.
    ///
    /// Lines that are not valid UTF-8 are rejected and prompted again.
    ///
    /// # Errors
    ///
    /// Returns an error if the console cannot be read or written.
    pub fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        loop {
            write!(self.output, "{prompt}")?;
            self.output.flush()?;

            self.buffer.clear();

            if self.input.read_until(b'\n', &mut self.buffer)? == 0 {
                writeln!(self.output)?;
                return Ok(None);
            }

            match std::str::from_utf8(&self.buffer) {
                Ok(answer) => return Ok(Some(answer.trim().to_string())),
                Err(_err) => writeln!(
                    self.output,
                    "Invalid input (not valid UTF-8), please try again."
                )?,
            }
        }
    }

    /// Prompt until `parse` accepts the answer.
    ///
    /// # Errors
    ///
    /// Returns an error if the console cannot be read or written.
    pub fn read_value<T, E, F>(&mut self, prompt: &str, parse: F) -> io::Result<Option<T>>
    where
        E: fmt::Display,
        F: Fn(&str) -> Result<T, E>,
    {
        loop {
            let Some(answer) = self.read_line(prompt)? else {
                return Ok(None);
            };

            match parse(&answer) {
                Ok(value) => return Ok(Some(value)),
                Err(error) => writeln!(self.output, "Invalid input ({error}), please try again.")?,
            }
        }
    }

    /// Prompt until the answer parses as `T`.
    ///
    /// # Errors
    ///
    /// Returns an error if the console cannot be read or written.
    pub fn read_parsed<T>(&mut self, prompt: &str) -> io::Result<Option<T>>
    where
        T: FromStr,
        T::Err: fmt::Display,
    {
        self.read_value(prompt, str::parse::<T>)
    }

    /// Prompt for every field of a product of the given kind.
    ///
    /// # Errors
    ///
    /// Returns an error if the console cannot be read or written.
    pub fn read_product(&mut self, kind: ProductKind) -> io::Result<Option<Product>> {
        let Some(id) = self.read_parsed::<ProductId>("Enter product ID: ")? else {
            return Ok(None);
        };

        let Some(name) = self.read_value("Enter product name: ", parse_name)? else {
            return Ok(None);
        };

        let Some(price) = self.read_parsed::<Price>("Enter product price: ")? else {
            return Ok(None);
        };

        let Some(quantity) = self.read_parsed::<u32>("Enter product quantity: ")? else {
            return Ok(None);
        };

        Ok(Some(Product::new(kind, id, name, price, quantity)))
    }

    /// Prompt for the product id and quantity of an order.
    ///
    /// # Errors
    ///
    /// Returns an error if the console cannot be read or written.
    pub fn read_order(&mut self) -> io::Result<Option<Order>> {
        let Some(product_id) = self.read_parsed::<ProductId>("Enter product ID: ")? else {
            return Ok(None);
        };

        let Some(quantity) = self.read_parsed::<u32>("Enter quantity: ")? else {
            return Ok(None);
        };

        Ok(Some(Order::new(product_id, quantity)))
    }
}

fn parse_name(answer: &str) -> Result<String, &'static str> {
    if answer.is_empty() {
        Err("name cannot be empty")
    } else if answer.contains(['\r', '\n']) {
        Err("name cannot contain line breaks")
    } else {
        Ok(answer.to_string())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use testresult::TestResult;

    use super::*;

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn reads_a_product() -> TestResult {
        let mut prompter = prompter("1\nMilk\n2.5\n10\n");

        let product = prompter
            .read_product(ProductKind::Grocery)?
            .ok_or("expected a product")?;

        assert_eq!(
            product,
            Product::grocery(ProductId::new(1), "Milk", "2.5".parse()?, 10)
        );

        let output = String::from_utf8(prompter.into_output())?;

        assert_eq!(
            output,
            "Enter product ID: Enter product name: Enter product price: Enter product quantity: "
        );

        Ok(())
    }

    #[test]
    fn names_keep_inner_spaces() -> TestResult {
        let mut prompter = prompter("3\n  Free range eggs \n0.30\n12\n");

        let product = prompter
            .read_product(ProductKind::Grocery)?
            .ok_or("expected a product")?;

        assert_eq!(product.name, "Free range eggs");

        Ok(())
    }

    #[test]
    fn invalid_answers_are_prompted_again() -> TestResult {
        let mut prompter = prompter("abc\n-4\n4\n\nRadio\n-1\n40\nlots\n3\n");

        let product = prompter
            .read_product(ProductKind::Electronics)?
            .ok_or("expected a product")?;

        assert_eq!(product.id, ProductId::new(4));
        assert_eq!(product.name, "Radio");
        assert_eq!(product.price, "40".parse()?);
        assert_eq!(product.quantity, 3);
        assert_eq!(product.kind, ProductKind::Electronics);

        let output = String::from_utf8(prompter.into_output())?;

        assert_eq!(output.matches("please try again").count(), 5);

        Ok(())
    }

    #[test]
    fn end_of_input_abandons_the_product() -> TestResult {
        let mut prompter = prompter("1\nMilk\n");

        assert_eq!(prompter.read_product(ProductKind::Grocery)?, None);

        Ok(())
    }

    #[test]
    fn reads_an_order() -> TestResult {
        let mut prompter = prompter("99\n1\n");

        assert_eq!(
            prompter.read_order()?,
            Some(Order::new(ProductId::new(99), 1))
        );

        Ok(())
    }

    #[test]
    fn invalid_utf8_is_prompted_again() -> TestResult {
        let mut prompter = Prompter::new(Cursor::new(b"\xff\xfe\n3\n".to_vec()), Vec::new());

        assert_eq!(
            prompter.read_line("Enter your choice: ")?,
            Some("3".to_string())
        );

        let output = String::from_utf8(prompter.into_output())?;

        assert_eq!(
            output,
            "Enter your choice: Invalid input (not valid UTF-8), please try again.\n\
             Enter your choice: "
        );

        Ok(())
    }

    #[test]
    fn names_with_line_breaks_are_rejected() {
        assert_eq!(parse_name("Milk\rSemi"), Err("name cannot contain line breaks"));
        assert_eq!(parse_name("Milk"), Ok("Milk".to_string()));
    }

    #[test]
    fn read_line_returns_none_at_end_of_input() -> TestResult {
        let mut prompter = prompter("");

        assert_eq!(prompter.read_line("Enter your choice: ")?, None);

        Ok(())
    }
}
