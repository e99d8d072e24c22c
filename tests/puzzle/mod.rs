// Step 1: From K or R to Lock Script
pub mod test_matching;

// Step 2: From Funding Transaction to Puzzle Outputs
pub mod test_utxos;

// Step 3: From Puzzle Outputs to Signed Spend
pub mod test_signing;
