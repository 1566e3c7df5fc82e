//! Import from a simple csv format logic.
//!
//! A problem is defined as a transportation tableau: every source record holds costs to all
//! destinations followed by source supply, the last record holds destination demands:
//!
//! ```text
//! 8,6,10,9,20
//! 9,12,13,7,30
//! 14,9,16,5,25
//! 10,25,25,15
//! ```

#[cfg(test)]
#[path = "../../../tests/unit/extensions/import/csv_test.rs"]
mod csv_test;

pub use self::actual::read_csv_problem;

#[cfg(feature = "csv-format")]
mod actual {
    extern crate csv;

    use ibfs_core::models::{Cost, CostMatrix, Problem, Units};
    use ibfs_core::utils::GenericResult;
    use std::fmt::Display;
    use std::io::{BufReader, Read};
    use std::str::FromStr;

    fn parse_value<T>(value: &str, entity: &str, record: usize) -> GenericResult<T>
    where
        T: FromStr,
        T::Err: Display,
    {
        value.parse::<T>().map_err(|err| format!("cannot parse {entity} '{value}' at record {record}: '{err}'").into())
    }

    /// Reads problem from csv format.
    pub fn read_csv_problem<R: Read>(reader: BufReader<R>) -> GenericResult<Problem> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .trim(csv::Trim::All)
            .comment(Some(b'#'))
            .from_reader(reader);

        let records = reader
            .records()
            .collect::<Result<Vec<_>, _>>()
            .map_err(|err| format!("cannot read csv: '{err}'"))?;

        let (demand_record, source_records) = match records.split_last() {
            Some((demand_record, source_records)) if !source_records.is_empty() => (demand_record, source_records),
            _ => return Err("csv format expects source records followed by a demand record".into()),
        };

        let demand = demand_record
            .iter()
            .map(|value| parse_value::<Units>(value, "demand", source_records.len()))
            .collect::<GenericResult<Vec<_>>>()?;

        let mut supply = Vec::with_capacity(source_records.len());
        let mut costs = Vec::with_capacity(source_records.len());

        for (index, record) in source_records.iter().enumerate() {
            let fields = record.iter().collect::<Vec<_>>();
            let Some((source_supply, source_costs)) = fields.split_last() else {
                return Err(format!("source record {index} is empty").into());
            };

            supply.push(parse_value::<Units>(source_supply, "supply", index)?);
            costs.push(
                source_costs
                    .iter()
                    .map(|value| parse_value::<Cost>(value, "cost", index))
                    .collect::<GenericResult<Vec<_>>>()?,
            );
        }

        Ok(Problem::new(supply, demand, CostMatrix::from_rows(costs)?))
    }
}

#[cfg(not(feature = "csv-format"))]
mod actual {
    use ibfs_core::models::Problem;
    use ibfs_core::utils::GenericResult;
    use std::io::{BufReader, Read};

    /// A stub method for reading problem from csv format.
    pub fn read_csv_problem<R: Read>(_reader: BufReader<R>) -> GenericResult<Problem> {
        Err("csv-format feature is not included".into())
    }
}
