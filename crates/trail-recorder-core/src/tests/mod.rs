mod map_layer;
mod support;
mod trail;
