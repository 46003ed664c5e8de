symcore::bin!(sc_defines);
