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
use colored::Colorize;

use crate::desk::CourierDesk;

pub fn execute(desk: &CourierDesk, package_id: &str, format: &str) -> Result<()> {
    let status = desk.track_package(package_id)?;

    match format {
        "json" => println!("{}", serde_json::to_string_pretty(&status)?),
        _ => {
            println!("{} {}", "Package".bold(), status.id.bold());
            println!("{} → {}", status.src, status.dest);
            println!("Status:      {}", status.status.cyan());
            println!("Reached:     {}", status.reached_at);
            println!(
                "Updated:     {}",
                status.updated_at.to_rfc3339().bright_black()
            );
        }
    }

    Ok(())
}
