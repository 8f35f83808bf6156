mod create;
mod cuisines;
mod list;
mod seed;
