/*
 *
 *  *
 *  *      Copyright (c) 2018-2025, SnackCloud All rights reserved.
 *  *
 *  *   Redistribution and use in source and binary forms, with or without
 *  *   modification, are permitted provided that the following conditions are met:
 *  *
 *  *   Redistributions of source code must retain the above copyright notice,
 *  *   this list of conditions and the following disclaimer.
 *  *   Redistributions in binary form must reproduce the above copyright
 *  *   notice, this list of conditions and the following disclaimer in the
 *  *   documentation and/or other materials provided with the distribution.
 *  *   Neither the name of the www.snackcloud.cn developer nor the names of its
 *  *   contributors may be used to endorse or promote products derived from
 *  *   this software without specific prior written permission.
 *  *   Author: SnackCloud
 *  *
 *
 */
use std::fmt::Formatter;
use std::slice;

use crate::errors::UnipoolError;
use crate::value::{FromValue, Value};

/// Index into a row, either by position or by column name.
pub trait ColumnIndex {
    fn idx(&self, columns: &[String]) -> Option<usize>;
}

impl ColumnIndex for usize {
    fn idx(&self, columns: &[String]) -> Option<usize> {
        if *self < columns.len() {
            Some(*self)
        } else {
            None
        }
    }
}

impl ColumnIndex for &str {
    fn idx(&self, columns: &[String]) -> Option<usize> {
        // Oracle reports upper-cased column names, so the lookup ignores case.
        columns.iter().position(|c| c.eq_ignore_ascii_case(self))
    }
}

/// One materialized result row: parallel vectors of column names and values.
#[derive(Debug, PartialEq, Clone)]
pub struct Row {
    pub columns: Vec<String>,
    pub data: Vec<Value>,
}

impl Row {
    pub fn new(columns: Vec<String>, data: Vec<Value>) -> Self {
        Self { columns, data }
    }

    /// Returns length of a row.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns columns of this row.
    pub fn columns_ref(&self) -> &[String] {
        &self.columns
    }

    /// Returns reference to the value of a column with index `index` if it exists.
    ///
    /// Non panicking version of `row[usize]`.
    pub fn as_ref(&self, index: usize) -> Option<&Value> {
        self.data.get(index)
    }

    /// Will copy value at `index` and convert it to `T`. `None` on a missing
    /// column or a failed conversion.
    pub fn get<T, I>(&self, index: I) -> Option<T>
    where
        T: FromValue,
        I: ColumnIndex,
    {
        self.get_opt(index).and_then(|res| res.ok())
    }

    /// Like `Row::get`, but allows you to directly handle the conversion error.
    pub fn get_opt<T, I>(&self, index: I) -> Option<Result<T, UnipoolError>>
    where
        T: FromValue,
        I: ColumnIndex,
    {
        index
            .idx(&self.columns)
            .and_then(|idx| self.data.get(idx))
            .map(|v| T::from_value_opt(v))
    }

    pub fn iter(&self) -> RowIter<'_> {
        RowIter {
            columns: &self.columns,
            data: &self.data,
            index: 0,
        }
    }
}

pub struct RowIter<'a> {
    columns: &'a [String],
    data: &'a [Value],
    index: usize,
}

impl<'a> Iterator for RowIter<'a> {
    type Item = (&'a String, &'a Value);

    fn next(&mut self) -> Option<Self::Item> {
        let i = self.index;
        if i >= self.data.len() {
            return None;
        }
        self.index += 1;
        Some((&self.columns[i], &self.data[i]))
    }
}

/// use this to store data retrieved from the database
#[derive(Debug, PartialEq, Clone)]
pub struct Rows {
    pub data: Vec<Row>,
    /// can be optionally set, indicates how many total rows are there in the table
    pub count: Option<usize>,
}

impl Default for Rows {
    fn default() -> Self {
        Self {
            data: vec![],
            count: None,
        }
    }
}

impl std::fmt::Display for Rows {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "<==    Columns: {}",
            self.data
                .iter()
                .next()
                .map(|v| v.columns.join(", "))
                .unwrap_or("[]".to_string())
        )?;
        for row in self.data.iter() {
            writeln!(
                f,
                "<==        Row: {}",
                row.data
                    .iter()
                    .map(|v| format!("{}", v))
                    .collect::<Vec<String>>()
                    .join(", ")
            )?;
        }
        write!(f, "<==      Total: {}", self.count.unwrap_or(self.data.len()))
    }
}

impl Rows {
    pub fn empty() -> Self {
        Rows::new()
    }

    pub fn new() -> Self {
        Rows {
            data: vec![],
            count: None,
        }
    }

    /// Returns true if the row has a length of 0.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn push(&mut self, row: Row) {
        self.data.push(row)
    }

    /// Returns an iterator over the `Row`s.
    pub fn iter(&self) -> RowsIter<'_> {
        RowsIter {
            inner: self.data.iter(),
        }
    }

    pub fn first(&self) -> Option<&Row> {
        self.data.first()
    }

    pub fn last(&self) -> Option<&Row> {
        self.data.last()
    }

    pub fn get(&self, index: usize) -> Option<&Row> {
        self.data.get(index)
    }

    pub fn set_count(&mut self, count: usize) -> &mut Self {
        self.count = Some(count);
        self
    }

    pub fn into_inner(self) -> Vec<Row> {
        self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn to_json(&self) -> String {
        let objects: Vec<serde_json::Value> = self
            .iter()
            .map(|row| {
                let mut map = serde_json::Map::new();
                for (column, value) in row.iter() {
                    map.insert(
                        column.clone(),
                        serde_json::Value::String(format!("{}", value)),
                    );
                }
                serde_json::Value::Object(map)
            })
            .collect();
        serde_json::Value::Array(objects).to_string()
    }
}

pub struct RowsIter<'a> {
    inner: slice::Iter<'a, Row>,
}

impl<'a> Iterator for RowsIter<'a> {
    type Item = &'a Row;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }
}

impl IntoIterator for Rows {
    type Item = Row;
    type IntoIter = std::vec::IntoIter<Row>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

#[test]
fn test_row_access() {
    let row = Row::new(
        vec!["EMPLOYEEID".to_string(), "EMPLOYEENAME".to_string()],
        vec![Value::Bigint(1), Value::Text("Grace Hopper".to_string())],
    );
    assert_eq!(row.get::<i64, _>(0), Some(1));
    assert_eq!(row.get::<String, _>(1), Some("Grace Hopper".to_string()));
    assert_eq!(row.get::<i64, _>("employeeid"), Some(1));
    assert_eq!(row.get::<i64, _>(5), None);
}
