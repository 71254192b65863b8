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

mod ask;
mod mcp;
mod serve;
mod ticket;
mod track;

use anyhow::Result;

use crate::cli::Commands;
use crate::config::Config;
use crate::desk::CourierDesk;

/// Dispatch a parsed CLI command
pub async fn execute(config: &Config, command: Commands) -> Result<()> {
    match command {
        Commands::Serve { host, port } => serve::execute(config, host, port).await,
        Commands::Mcp { .. } => mcp::execute(config).await,
        Commands::Ask { query, format } => {
            let desk = CourierDesk::from_config(config)?;
            ask::execute(&desk, &query.join(" "), &format)
        }
        Commands::Categories { format } => {
            let desk = CourierDesk::from_config(config)?;
            ask::list_categories(&desk, &format)
        }
        Commands::Ticket {
            email,
            phone,
            issue,
            package,
            format,
        } => {
            let desk = CourierDesk::from_config(config)?;
            ticket::execute(&desk, email, phone, issue, package, &format)
        }
        Commands::Track { package_id, format } => {
            let desk = CourierDesk::from_config(config)?;
            track::execute(&desk, &package_id, &format)
        }
    }
}
