symcore::bin!(sc_version);
