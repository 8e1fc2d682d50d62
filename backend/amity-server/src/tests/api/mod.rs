mod extractors;
