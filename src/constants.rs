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

/// Customer support phone line quoted in the fallback answer
pub const SUPPORT_PHONE: &str = "1800-COURIER (1800-268-7437)";

/// Customer support mailbox quoted in the fallback answer
pub const SUPPORT_EMAIL: &str = "support@courier.com";

/// Category reported when neither lookup pass matches
pub const FALLBACK_CATEGORY: &str = "general";

/// Source label attached to every knowledge-base response
pub const ANSWER_SOURCE: &str = "company_policies";

/// Status assigned to freshly created tickets
pub const TICKET_OPEN_STATUS: &str = "Open";

/// Length of the random suffix in ticket IDs
pub const TICKET_SUFFIX_LEN: usize = 6;

/// Fields a support ticket request must carry, in wire order
pub const TICKET_REQUIRED_FIELDS: [&str; 4] = ["email", "phoneNo", "issueDescription", "packageId"];
