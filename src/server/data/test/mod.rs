mod dance_class;
mod dancer;
