// Copyright 2026 Muvon Un Limited
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use anyhow::Result;

use crate::desk::CourierDesk;
use crate::error::DeskError;
use crate::knowledge::formatting::{format_categories, format_query_result};

pub fn execute(desk: &CourierDesk, query: &str, format: &str) -> Result<()> {
    if query.trim().is_empty() {
        return Err(DeskError::MissingQuery.into());
    }

    match format {
        "json" => {
            let answer = desk.ask(query)?;
            println!("{}", serde_json::to_string_pretty(&answer)?);
        }
        _ => {
            let result = desk.resolver().resolve(query);
            print!("{}", format_query_result(&result));
        }
    }

    Ok(())
}

pub fn list_categories(desk: &CourierDesk, format: &str) -> Result<()> {
    let knowledge_base = desk.resolver().knowledge_base();

    match format {
        "json" => println!(
            "{}",
            serde_json::to_string_pretty(knowledge_base.entries())?
        ),
        _ => print!("{}", format_categories(knowledge_base)),
    }

    Ok(())
}
