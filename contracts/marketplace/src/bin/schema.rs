use cosmwasm_schema::write_api;

use curio_marketplace::migrate::MigrateMsg;
use curio_marketplace::msg::{ExecuteMsg, InstantiateMsg, QueryMsg};

fn main() {
    write_api! {
        instantiate: InstantiateMsg,
        execute: ExecuteMsg,
        query: QueryMsg,
        migrate: MigrateMsg,
    }
}
