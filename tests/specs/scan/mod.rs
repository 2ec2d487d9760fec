mod config;
mod dry_run;
mod ignore;
mod report;
mod safety;
mod timeout;
