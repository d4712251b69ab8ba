mod fixtures;

mod nodes;
