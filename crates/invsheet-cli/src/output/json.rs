use invsheet_core::error::InvoiceError;
use serde::Serialize;

pub fn print<T: Serialize + ?Sized>(value: &T) -> Result<(), InvoiceError> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{json}");
    Ok(())
}
