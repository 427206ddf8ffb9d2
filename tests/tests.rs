mod controller;
mod startup;
mod util;
