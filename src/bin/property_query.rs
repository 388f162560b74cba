//! Print one derivation of the property record as compact JSON.
//!
//! Page builds and shell scripts call this instead of parsing the record
//! themselves, so the flattening, address and contact rules stay in one place.

use anyhow::{Context, Result, bail};
use chalet_catalog::{
    BookingPeriod, PropertyCatalog, logging, resolve_property_path, vacation_rental,
};
use serde_json::Value;
use std::env;
use std::ffi::OsString;
use std::path::PathBuf;

fn main() {
    logging::init();
    if let Err(err) = run() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = CliArgs::parse(env::args_os().skip(1))?;
    let path = resolve_property_path(args.file.as_deref())?;
    let catalog = PropertyCatalog::load(&path)?;
    let output = query(&catalog, &args.field)?;
    println!("{}", serde_json::to_string(&output)?);
    Ok(())
}

#[derive(Debug, PartialEq)]
enum Field {
    Address,
    PrimaryContact,
    OwnerContact,
    Amenities,
    SchemaAmenities,
    StructuredData,
    Cancellation { days: u32, period: BookingPeriod },
}

fn query(catalog: &PropertyCatalog, field: &Field) -> Result<Value> {
    let value = match field {
        Field::Address => Value::String(catalog.full_address()),
        Field::PrimaryContact => serde_json::to_value(catalog.primary_contact()?)?,
        Field::OwnerContact => serde_json::to_value(catalog.owner_contact())?,
        Field::Amenities => serde_json::to_value(catalog.all_amenities())?,
        Field::SchemaAmenities => serde_json::to_value(catalog.schema_amenities())?,
        Field::StructuredData => vacation_rental(catalog),
        Field::Cancellation { days, period } => {
            let tier = catalog.cancellation_tier(*days, *period).with_context(|| {
                format!("no {} cancellation tier covers {days} days", period.as_str())
            })?;
            serde_json::to_value(tier)?
        }
    };
    Ok(value)
}

struct CliArgs {
    file: Option<PathBuf>,
    field: Field,
}

impl CliArgs {
    fn parse(args: impl IntoIterator<Item = OsString>) -> Result<Self> {
        let mut args = args.into_iter();
        let mut file: Option<PathBuf> = None;
        let mut field_name: Option<String> = None;
        let mut days: Option<u32> = None;
        let mut peak = false;

        while let Some(arg_os) = args.next() {
            let arg = arg_os
                .into_string()
                .map_err(|_| anyhow::anyhow!("argument is not valid UTF-8"))?;
            match arg.as_str() {
                "--file" => {
                    let path = next_value(&mut args, "--file")?;
                    file = Some(PathBuf::from(path));
                }
                "--days" => {
                    let raw = next_value(&mut args, "--days")?;
                    let parsed = raw.parse::<u32>().with_context(|| {
                        format!("--days expects a non-negative integer, got {raw}")
                    })?;
                    days = Some(parsed);
                }
                "--peak" => peak = true,
                "--help" | "-h" => {
                    print!("{}", usage());
                    std::process::exit(0);
                }
                other if other.starts_with("--") => bail!("unknown flag: {other}"),
                other => {
                    if field_name.is_some() {
                        bail!("only one FIELD may be requested");
                    }
                    field_name = Some(other.to_string());
                }
            }
        }

        let Some(field_name) = field_name else {
            bail!(usage());
        };
        let field = match field_name.as_str() {
            "address" => Field::Address,
            "primary-contact" => Field::PrimaryContact,
            "owner-contact" => Field::OwnerContact,
            "amenities" => Field::Amenities,
            "schema-amenities" => Field::SchemaAmenities,
            "structured-data" => Field::StructuredData,
            "cancellation" => {
                let Some(days) = days else {
                    bail!("cancellation requires --days N");
                };
                let period = if peak {
                    BookingPeriod::Peak
                } else {
                    BookingPeriod::Standard
                };
                Field::Cancellation { days, period }
            }
            other => bail!("unknown field '{other}'\n{}", usage()),
        };
        if !matches!(field, Field::Cancellation { .. }) && (days.is_some() || peak) {
            bail!("--days/--peak only apply to the cancellation field");
        }

        Ok(CliArgs { file, field })
    }
}

fn next_value(args: &mut impl Iterator<Item = OsString>, flag: &str) -> Result<String> {
    args.next()
        .map(|os| {
            os.into_string()
                .map_err(|_| anyhow::anyhow!("value for {flag} is not valid UTF-8"))
        })
        .transpose()?
        .ok_or_else(|| anyhow::anyhow!("missing value for {flag}"))
}

fn usage() -> &'static str {
    "Usage: property-query [--file PATH] FIELD [--days N] [--peak]\n\
Fields: address, primary-contact, owner-contact, amenities, schema-amenities, structured-data, cancellation\n\
The record defaults to $CHALET_PROPERTY_FILE, then data/property.json under the repository root.\n"
}
