// Step 1: From Seed to Master Extended Key
// Step 2: From Master Extended Key to Child Extended Keys
pub mod test_derivation;
