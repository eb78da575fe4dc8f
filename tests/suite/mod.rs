mod cli;
mod reconcile;
