/*!
Provides the `Client` struct for interacting with the backpack.tf Web API.

# Examples

```no_run
use bptf_web::client::Client;
use bptf_web::types::query::RawMode;

# async fn run() {
let client = Client::new("your-api-key");

let currencies = client.get_currencies(RawMode::Disabled).await.unwrap();
for (name, currency) in &currencies.currencies {
    println!("{}: {} {}", name, currency.price.value, currency.price.currency);
}
# }
```
*/

mod client;
pub(super) mod constants;
pub(super) mod http;
pub(super) mod utils;

pub use client::*;
