/*
 * Copyright 2019-2020 Wren Powell
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 */

use std::io::{self, Write};

use termbook::repo::{Entry, GenreFilter};

/// The indentation of code examples.
const CODE_INDENT: &str = "    ";

/// Write one entry under a heading.
pub fn entry(out: &mut impl Write, key: &str, entry: &Entry) -> io::Result<()> {
    writeln!(out, "## {}", key)?;
    writeln!(out, "genre: {}", entry.genre)?;
    writeln!(out, "{}", entry.description)?;
    if !entry.example.is_empty() {
        writeln!(out)?;
        for line in entry.example.lines() {
            writeln!(out, "{}{}", CODE_INDENT, line)?;
        }
    }
    Ok(())
}

/// Write a listing of entries separated by rules.
pub fn listing<'a>(
    out: &mut impl Write,
    filter: &GenreFilter,
    entries: impl IntoIterator<Item = (&'a str, &'a Entry)>,
) -> io::Result<()> {
    let mut count = 0;
    for (key, value) in entries {
        if count > 0 {
            writeln!(out, "---")?;
        }
        entry(out, key, value)?;
        count += 1;
    }

    if count == 0 {
        writeln!(out, "No entries in genre '{}'.", filter)?;
    }
    Ok(())
}

/// Write the choices for a genre selector, one per line.
pub fn genres<'a>(
    out: &mut impl Write,
    options: impl IntoIterator<Item = &'a str>,
) -> io::Result<()> {
    for option in options {
        writeln!(out, "{}", option)?;
    }
    Ok(())
}
