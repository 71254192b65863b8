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
use crate::ticket::TicketRequest;

pub fn execute(
    desk: &CourierDesk,
    email: String,
    phone: String,
    issue: String,
    package: String,
    format: &str,
) -> Result<()> {
    let receipt = desk.open_ticket(TicketRequest {
        email: Some(email),
        phone_no: Some(phone),
        issue_description: Some(issue),
        package_id: Some(package),
    })?;

    match format {
        "json" => println!("{}", serde_json::to_string_pretty(&receipt)?),
        _ => {
            let ticket = &receipt.ticket;
            println!("{}", receipt.message.green());
            println!("Ticket:   {}", ticket.ticket_id.bold());
            println!("Package:  {}", ticket.package_id);
            println!("Status:   {} ({} priority)", ticket.status, ticket.priority);
            println!("Contact:  {} / {}", ticket.email, ticket.phone_no);
            println!("Created:  {}", ticket.created_at.to_rfc3339());
        }
    }

    Ok(())
}
