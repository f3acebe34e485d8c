mod geojson_file_renderer;
