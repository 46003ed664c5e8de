symcore::bin!(sc_libprobe);
